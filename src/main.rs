// src/main.rs

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;

use assistencia_backend::{config::AppState, db, handlers};

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve
    // iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização.
    db::MIGRATOR
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // SEED_DB=true recarrega as fixtures de desenvolvimento.
    if std::env::var("SEED_DB").is_ok_and(|v| v == "true") {
        db::seed::run(&app_state.db_pool)
            .await
            .expect("Falha ao popular o banco de dados.");
        tracing::info!("✅ Fixtures de desenvolvimento carregadas!");
    }

    let client_routes = Router::new()
        .route(
            "/client",
            get(handlers::client::list)
                .post(handlers::client::create)
                .put(handlers::client::update),
        )
        .route(
            "/client/{id}",
            get(handlers::client::get).delete(handlers::client::remove),
        )
        .route("/clients", post(handlers::client::bulk));

    let phone_routes = Router::new()
        .route(
            "/phone",
            get(handlers::phone::list)
                .post(handlers::phone::create)
                .put(handlers::phone::update),
        )
        .route(
            "/phone/{id}",
            get(handlers::phone::get).delete(handlers::phone::remove),
        )
        .route("/phones", post(handlers::phone::bulk));

    let service_routes = Router::new()
        .route(
            "/service",
            get(handlers::service::list)
                .post(handlers::service::create)
                .put(handlers::service::update),
        )
        .route(
            "/service/{id}",
            get(handlers::service::get).delete(handlers::service::remove),
        )
        .route("/services", post(handlers::service::bulk));

    let service_order_routes = Router::new()
        .route(
            "/serviceOrder",
            get(handlers::service_order::list)
                .post(handlers::service_order::create)
                .put(handlers::service_order::update),
        )
        .route(
            "/serviceOrder/{id}",
            get(handlers::service_order::get).delete(handlers::service_order::remove),
        )
        .route(
            "/serviceOrder/{id}/services",
            get(handlers::service_order::services),
        )
        .route(
            "/serviceOrderHasService",
            get(handlers::service_order::list_links)
                .post(handlers::service_order::create_link)
                .put(handlers::service_order::update_link),
        )
        .route(
            "/serviceOrderHasService/{idServiceOrder}/{idService}",
            get(handlers::service_order::get_link).delete(handlers::service_order::remove_link),
        );

    // Rotas de relatório, uma por agregado.
    let report_routes = Router::new()
        .route(
            "/rankServiceByModel",
            get(handlers::report::rank_service_by_model),
        )
        .route(
            "/totalServiceOrderByClient",
            get(handlers::report::total_service_order_by_client),
        )
        .route(
            "/totalServiceOrderByPeriod",
            get(handlers::report::total_service_order_by_period),
        )
        .route(
            "/totalValueFromServicesByPeriod",
            get(handlers::report::total_value_from_services_by_period),
        )
        .route(
            "/averageValueFromServicesOrderByPeriod",
            get(handlers::report::average_value_from_services_order_by_period),
        )
        .route(
            "/averageServiceOrderQuantityByPeriod",
            get(handlers::report::average_service_order_quantity_by_period),
        )
        .route(
            "/averageServiceDuration",
            get(handlers::report::average_service_duration),
        );

    // Combina tudo no router principal
    let api_routes = client_routes
        .merge(phone_routes)
        .merge(service_routes)
        .merge(service_order_routes)
        .merge(report_routes);

    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api", api_routes)
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3333";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!(
        "🚀 Servidor escutando em {}",
        listener.local_addr().expect("endereço local do listener")
    );
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
