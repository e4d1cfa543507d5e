// Declaração dos nossos módulos. O alvo de biblioteca existe para os testes
// de integração enxergarem o acessor, os serviços e as fixtures.
pub mod common;
pub mod config;
pub mod db;
pub mod handlers;
pub mod models;
pub mod services;
