mod common;

use assistencia_backend::config::AppState;

// Cenário ponta-a-ponta sobre as fixtures: 5 clientes, 7 aparelhos,
// 5 serviços, 5 ordens e seus vínculos, consultados pelo grafo de serviços
// montado igual ao da aplicação.
#[tokio::test]
async fn consulta_o_cenario_completo_semeado() {
    let pool = common::setup_pool().await;
    let state = AppState::with_pool(pool);

    assert_eq!(state.client_service.find().await.unwrap().len(), 5);
    assert_eq!(state.phone_service.find().await.unwrap().len(), 7);
    assert_eq!(state.service_service.find().await.unwrap().len(), 5);
    assert_eq!(state.order_link_service.find().await.unwrap().len(), 5);

    let orders = state.service_order_service.find().await.unwrap();
    assert_eq!(orders.len(), 5);

    // A distribuição de ordens por cliente bate com a semeadura:
    // Caio 2, Lucas 1, Leví 1, Guilherme 1, Milena 0.
    let totals = state
        .report_service
        .total_service_order_by_client()
        .await
        .unwrap();
    let counts: Vec<i64> = totals.iter().map(|t| t.orders).collect();
    assert_eq!(counts, vec![2, 1, 1, 1, 0]);
}
