// src/db/seed.rs

use sqlx::sqlite::SqlitePool;

use crate::common::error::AppError;

/// Recarrega as fixtures de desenvolvimento: apaga tudo e insere os dados
/// originais (5 clientes, 7 aparelhos, 5 serviços, 5 ordens e seus vínculos).
/// Também é a base do cenário ponta-a-ponta dos testes.
pub async fn run(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    // Filhos antes dos pais, por causa das chaves estrangeiras.
    sqlx::query("DELETE FROM ServiceOrderHasService")
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM ServiceOrder")
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM Service").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM Phone").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM Client").execute(&mut *tx).await?;

    let clients: [(i64, &str, &str, &str); 5] = [
        (1, "Caio Cezar das Neves Moreira", "caioslppuo@gmail.com", "12345678910"),
        (2, "Lucas Garavaglia", "lucasgrafimar@gmail.com", "12345678911"),
        (3, "Leví Cícero Arcanjo", "arcanjolevi@gmail.com", "12345678912"),
        (4, "Guilherme Bachega Gomes", "guizobachegagomes@gmail.com", "12345678913"),
        (5, "Milena Santos", "mii.santos342@gmail.com", "12345678914"),
    ];
    for (id, name, email, cpf) in clients {
        sqlx::query("INSERT INTO Client (id, name, email, cpf) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(email)
            .bind(cpf)
            .execute(&mut *tx)
            .await?;
    }

    let phones: [(i64, &str); 7] = [
        (1, "Xiaomi"),
        (2, "Motorola"),
        (3, "Samsung"),
        (4, "Apple"),
        (5, "Huawei"),
        (6, "Nokia"),
        (7, "Blue"),
    ];
    for (id, model) in phones {
        sqlx::query("INSERT INTO Phone (id, model) VALUES (?, ?)")
            .bind(id)
            .bind(model)
            .execute(&mut *tx)
            .await?;
    }

    let services: [(i64, &str, f64); 5] = [
        (1, "Colocar Película", 33.5),
        (2, "Troca de Tela", 120.99),
        (3, "Trocar Bateria", 34.99),
        (4, "Limpeza", 19.99),
        (5, "Remover Vírus", 29.99),
    ];
    for (id, service_type, price) in services {
        sqlx::query("INSERT INTO Service (id, type, price) VALUES (?, ?, ?)")
            .bind(id)
            .bind(service_type)
            .bind(price)
            .execute(&mut *tx)
            .await?;
    }

    let orders: [(i64, i64, i64, &str, Option<&str>); 5] = [
        (1, 1, 3, "2022-06-13", Some("2022-07-01")),
        (2, 2, 2, "2022-06-15", None),
        (3, 3, 4, "2022-05-18", Some("2022-06-25")),
        (4, 4, 1, "2022-08-20", None),
        (5, 1, 5, "2022-02-01", Some("2022-04-15")),
    ];
    for (id, id_client, id_phone, begin_date, end_date) in orders {
        sqlx::query(
            "INSERT INTO ServiceOrder (id, idClient, idPhone, beginDate, endDate) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(id_client)
        .bind(id_phone)
        .bind(begin_date)
        .bind(end_date)
        .execute(&mut *tx)
        .await?;
    }

    let links: [(i64, i64); 5] = [(1, 1), (2, 2), (3, 3), (4, 4), (5, 4)];
    for (id_service_order, id_service) in links {
        sqlx::query("INSERT INTO ServiceOrderHasService (idServiceOrder, idService) VALUES (?, ?)")
            .bind(id_service_order)
            .bind(id_service)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(())
}
