mod common;

use assistencia_backend::db::{Crud, ServiceOrderRepository};
use assistencia_backend::services::{OrderLinkService, ServiceOrderService};

fn order_service(pool: &sqlx::SqlitePool) -> ServiceOrderService {
    ServiceOrderService::new(
        Crud::new(pool.clone()),
        ServiceOrderRepository::new(pool.clone()),
    )
}

#[tokio::test]
async fn lista_as_ordens_na_visao_achatada() {
    let pool = common::setup_pool().await;
    let orders = order_service(&pool);

    let all = orders.find().await.unwrap();
    assert_eq!(all.len(), 5);

    // Ordem 1: cliente Caio, aparelho Samsung.
    assert_eq!(all[0].client, "Caio Cezar das Neves Moreira");
    assert_eq!(all[0].cpf, "12345678910");
    assert_eq!(all[0].model, "Samsung");
    assert!(!all[0].canceled);
    assert_eq!(all[0].begin_date.to_string(), "2022-06-13");
    assert_eq!(all[0].end_date.unwrap().to_string(), "2022-07-01");
}

#[tokio::test]
async fn busca_uma_ordem_pelo_id() {
    let pool = common::setup_pool().await;
    let orders = order_service(&pool);

    let found = orders.find_one(2).await.unwrap().unwrap();
    assert_eq!(found.client, "Lucas Garavaglia");
    assert_eq!(found.model, "Motorola");
    assert!(found.end_date.is_none());

    assert!(orders.find_one(99).await.unwrap().is_none());
}

#[tokio::test]
async fn insere_ordem_com_servicos_vinculados() {
    let pool = common::setup_pool().await;
    let orders = order_service(&pool);

    // Data sem zero à esquerda, normalizada na entrada.
    let inserted = orders.insert(3, 5, &[1, 2], "2022-9-1").await.unwrap();

    let found = orders.find_one(inserted.id).await.unwrap().unwrap();
    assert_eq!(found.client, "Leví Cícero Arcanjo");
    assert_eq!(found.model, "Huawei");
    assert_eq!(found.begin_date.to_string(), "2022-09-01");

    let linked = orders.services(inserted.id).await.unwrap();
    assert_eq!(linked.len(), 2);
    assert_eq!(linked[0].service_type, "Colocar Película");
    assert_eq!(linked[1].price, 120.99);
}

#[tokio::test]
async fn aparelho_inexistente_e_checado_primeiro() {
    let pool = common::setup_pool().await;
    let orders = order_service(&pool);

    let err = orders.insert(1, 10, &[], "2022-09-01").await.unwrap_err();
    assert_eq!(err.to_string(), "phone doesn't exist");

    let err = orders.insert(10, 1, &[], "2022-09-01").await.unwrap_err();
    assert_eq!(err.to_string(), "client doesn't exist");

    // Com os dois inválidos, vale a checagem do aparelho.
    let err = orders.insert(10, 10, &[], "2022-09-01").await.unwrap_err();
    assert_eq!(err.to_string(), "phone doesn't exist");
}

#[tokio::test]
async fn servico_invalido_desfaz_a_ordem_inteira() {
    let pool = common::setup_pool().await;
    let orders = order_service(&pool);

    let err = orders.insert(3, 5, &[1, 99], "2022-09-01").await.unwrap_err();
    assert_eq!(err.to_string(), "could not insert, invalid service");

    // Nada persistiu: nem a ordem, nem o vínculo válido.
    assert_eq!(orders.find().await.unwrap().len(), 5);
    let links = OrderLinkService::new(Crud::new(pool)).find().await.unwrap();
    assert_eq!(links.len(), 5);
}

#[tokio::test]
async fn remover_ordem_e_soft_delete() {
    let pool = common::setup_pool().await;
    let orders = order_service(&pool);

    let affected = orders.remove(4).await.unwrap();
    assert_eq!(affected, 1);

    // A linha fica, cancelada.
    let found = orders.find_one(4).await.unwrap().unwrap();
    assert!(found.canceled);
    assert_eq!(orders.find().await.unwrap().len(), 5);
}

#[tokio::test]
async fn remover_ordem_inexistente_e_erro_referencial() {
    let pool = common::setup_pool().await;
    let orders = order_service(&pool);

    let err = orders.remove(99).await.unwrap_err();
    assert_eq!(err.to_string(), "invalid service order id");
}

#[tokio::test]
async fn update_com_end_date_conclui_a_ordem() {
    let pool = common::setup_pool().await;
    let orders = order_service(&pool);

    let affected = orders
        .update(2, 2, 2, "2022-06-15", Some("2022-07-20"))
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let found = orders.find_one(2).await.unwrap().unwrap();
    assert_eq!(found.end_date.unwrap().to_string(), "2022-07-20");
}

#[tokio::test]
async fn data_invalida_e_rejeitada_antes_de_escrever() {
    let pool = common::setup_pool().await;
    let orders = order_service(&pool);

    let err = orders.insert(1, 1, &[], "13/06/2022").await.unwrap_err();
    assert_eq!(err.to_string(), "invalid date: 13/06/2022");
    assert_eq!(orders.find().await.unwrap().len(), 5);
}

// ---------------------------------------------------------------------------
//  Tabela de ligação
// ---------------------------------------------------------------------------

#[tokio::test]
async fn insere_e_busca_um_vinculo_por_chave_composta() {
    let pool = common::setup_pool().await;
    let links = OrderLinkService::new(Crud::new(pool));

    links.insert(1, 2).await.unwrap();

    let found = links.find_one(1, 2).await.unwrap().unwrap();
    assert_eq!(found.id_service_order, 1);
    assert_eq!(found.id_service, 2);

    assert!(links.find_one(1, 5).await.unwrap().is_none());
}

#[tokio::test]
async fn vinculo_exige_ordem_e_servico_existentes() {
    let pool = common::setup_pool().await;
    let links = OrderLinkService::new(Crud::new(pool));

    let err = links.insert(99, 1).await.unwrap_err();
    assert_eq!(err.to_string(), "invalid service order id");

    let err = links.insert(1, 99).await.unwrap_err();
    assert_eq!(err.to_string(), "invalid service id");
}

#[tokio::test]
async fn atualiza_e_remove_vinculo_sem_chave_primaria() {
    let pool = common::setup_pool().await;
    let links = OrderLinkService::new(Crud::new(pool));

    // Ordem 2 passa a apontar para o serviço 3.
    let affected = links.update(2, 2, 2, 3).await.unwrap();
    assert_eq!(affected, 1);
    assert!(links.find_one(2, 2).await.unwrap().is_none());
    assert!(links.find_one(2, 3).await.unwrap().is_some());

    let affected = links.remove(2, 3).await.unwrap();
    assert_eq!(affected, 1);
    assert_eq!(links.find().await.unwrap().len(), 4);
}
