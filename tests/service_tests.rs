mod common;

use assistencia_backend::db::{Crud, ReportRepository};
use assistencia_backend::services::{PhoneService, ServiceService};

fn service_service(pool: &sqlx::SqlitePool) -> ServiceService {
    ServiceService::new(Crud::new(pool.clone()), ReportRepository::new(pool.clone()))
}

#[tokio::test]
async fn rejeita_tipo_vazio() {
    let pool = common::setup_pool().await;
    let services = service_service(&pool);

    let err = services.insert("", 10.0).await.unwrap_err();
    assert_eq!(err.to_string(), "service type must not be empty");
}

#[tokio::test]
async fn tipo_duplicado_viola_constraint() {
    let pool = common::setup_pool().await;
    let services = service_service(&pool);

    let err = services.insert("Limpeza", 25.0).await.unwrap_err();
    assert_eq!(err.to_string(), "could not insert");
}

#[tokio::test]
async fn remover_servico_e_soft_delete() {
    let pool = common::setup_pool().await;
    let services = service_service(&pool);

    let affected = services.remove(4).await.unwrap();
    assert_eq!(affected, 1);

    // A linha continua recuperável, só com a flag ligada.
    let found = services.find_one(4).await.unwrap().unwrap();
    assert!(found.deleted);
    assert_eq!(found.service_type, "Limpeza");
    assert_eq!(services.find().await.unwrap().len(), 5);
}

#[tokio::test]
async fn remover_servico_inexistente_e_erro_referencial() {
    let pool = common::setup_pool().await;
    let services = service_service(&pool);

    let err = services.remove(99).await.unwrap_err();
    assert_eq!(err.to_string(), "invalid service id");
}

#[tokio::test]
async fn atualiza_tipo_e_preco() {
    let pool = common::setup_pool().await;
    let services = service_service(&pool);

    let affected = services.update(1, "Película 3D", 45.0).await.unwrap();
    assert_eq!(affected, 1);

    let found = services.find_one(1).await.unwrap().unwrap();
    assert_eq!(found.service_type, "Película 3D");
    assert_eq!(found.price, 45.0);
}

#[tokio::test]
async fn ranking_de_servicos_por_popularidade() {
    let pool = common::setup_pool().await;
    let services = service_service(&pool);

    let rank = services.find_rank_service_by_model().await.unwrap();

    // Limpeza (4) está em duas ordens; Remover Vírus (5) em nenhuma e por
    // isso não aparece.
    assert_eq!(rank.len(), 4);
    assert_eq!(rank[0].id, 4);
    assert_eq!(rank[0].quantity, 2);
    assert!(rank.iter().all(|r| r.id != 5));
    assert!(rank.windows(2).all(|w| w[0].quantity >= w[1].quantity));
}

#[tokio::test]
async fn rejeita_modelo_de_aparelho_vazio() {
    let pool = common::setup_pool().await;
    let phones = PhoneService::new(Crud::new(pool));

    let err = phones.insert("", false).await.unwrap_err();
    assert_eq!(err.to_string(), "phone model must not be empty");
}

#[tokio::test]
async fn modelo_duplicado_viola_constraint() {
    let pool = common::setup_pool().await;
    let phones = PhoneService::new(Crud::new(pool));

    let err = phones.insert("Xiaomi", false).await.unwrap_err();
    assert_eq!(err.to_string(), "could not insert");
}

#[tokio::test]
async fn insere_e_remove_um_aparelho() {
    let pool = common::setup_pool().await;
    let phones = PhoneService::new(Crud::new(pool));

    let inserted = phones.insert("Asus", false).await.unwrap();
    assert_eq!(phones.find().await.unwrap().len(), 8);

    let affected = phones.remove(inserted.id, false).await.unwrap();
    assert_eq!(affected, 1);
    assert!(phones.find_one(inserted.id).await.unwrap().is_none());
}
