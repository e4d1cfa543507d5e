mod common;

use assistencia_backend::db::ReportRepository;
use assistencia_backend::services::ReportService;

fn report_service(pool: &sqlx::SqlitePool) -> ReportService {
    ReportService::new(ReportRepository::new(pool.clone()))
}

#[tokio::test]
async fn total_de_ordens_por_cliente_inclui_quem_nao_tem_ordem() {
    let pool = common::setup_pool().await;
    let reports = report_service(&pool);

    let totals = reports.total_service_order_by_client().await.unwrap();
    assert_eq!(totals.len(), 5);

    // Caio aparece em duas ordens; Milena em nenhuma.
    assert_eq!(totals[0].name, "Caio Cezar das Neves Moreira");
    assert_eq!(totals[0].orders, 2);
    assert_eq!(totals[4].name, "Milena Santos");
    assert_eq!(totals[4].orders, 0);
}

#[tokio::test]
async fn total_de_ordens_concluidas_no_periodo() {
    let pool = common::setup_pool().await;
    let reports = report_service(&pool);

    // Ano inteiro: as três ordens com endDate (1, 3 e 5).
    let result = reports
        .total_service_order_by_period("2022-1-1", "2022-12-31")
        .await
        .unwrap();
    assert_eq!(result.total, 3);
    let ids: Vec<i64> = result.service_orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1, 3, 5]);

    // Janela menor: a ordem 5 começa antes do início e fica de fora.
    let result = reports
        .total_service_order_by_period("2022-05-01", "2022-07-31")
        .await
        .unwrap();
    assert_eq!(result.total, 2);
}

#[tokio::test]
async fn rendimento_por_servico_inclui_zero() {
    let pool = common::setup_pool().await;
    let reports = report_service(&pool);

    let revenues = reports
        .total_value_from_services_by_period("2022-01-01", "2022-12-31")
        .await
        .unwrap();
    assert_eq!(revenues.len(), 5);

    // Serviços usados em ordens concluídas rendem count × preço.
    assert_eq!(revenues[0].revenue, 33.5); // Colocar Película, ordem 1
    assert_eq!(revenues[2].revenue, 34.99); // Trocar Bateria, ordem 3
    assert_eq!(revenues[3].revenue, 19.99); // Limpeza, ordem 5 (a 4 está aberta)

    // Troca de Tela só aparece numa ordem aberta: Rendimento = 0, não erro.
    assert_eq!(revenues[1].service_type, "Troca de Tela");
    assert_eq!(revenues[1].revenue, 0.0);
    // Remover Vírus nunca foi usado.
    assert_eq!(revenues[4].revenue, 0.0);
}

#[tokio::test]
async fn media_de_valor_em_ordens_abertas_no_periodo() {
    let pool = common::setup_pool().await;
    let reports = report_service(&pool);

    // Abertas no período: ordem 2 (Troca de Tela) e ordem 4 (Limpeza).
    let average = reports
        .average_value_from_services_order_by_period("2022-01-01", "2022-12-31")
        .await
        .unwrap();
    let expected = (120.99 + 19.99) / 5.0;
    assert!((average - expected).abs() < 1e-9);

    // Período sem nenhuma ordem aberta: média 0.
    let average = reports
        .average_value_from_services_order_by_period("2023-01-01", "2023-12-31")
        .await
        .unwrap();
    assert_eq!(average, 0.0);
}

#[tokio::test]
async fn media_de_usos_por_ordem_no_periodo() {
    let pool = common::setup_pool().await;
    let reports = report_service(&pool);

    // 2 usos em ordens abertas / 5 ordens iniciadas na janela.
    let average = reports
        .average_service_order_quantity_by_period("2022-01-01", "2022-12-31")
        .await
        .unwrap();
    assert!((average - 0.4).abs() < 1e-9);

    // Denominador zero não divide: devolve 0.
    let average = reports
        .average_service_order_quantity_by_period("2023-01-01", "2023-12-31")
        .await
        .unwrap();
    assert_eq!(average, 0.0);
}

#[tokio::test]
async fn duracao_media_so_para_servicos_com_ordem_concluida() {
    let pool = common::setup_pool().await;
    let reports = report_service(&pool);

    let durations = reports.average_service_duration().await.unwrap();

    // Só os serviços 1, 3 e 4 têm ordem com endDate; os demais não entram.
    assert_eq!(durations.len(), 3);

    assert_eq!(durations[0].id, 1);
    assert!((durations[0].average_duration - 18.0).abs() < 1e-9);

    assert_eq!(durations[1].id, 3);
    assert!((durations[1].average_duration - 38.0).abs() < 1e-9);

    assert_eq!(durations[2].id, 4);
    assert!((durations[2].average_duration - 73.0).abs() < 1e-9);
}
