// src/models/upload.rs

use serde::Serialize;

/// Resultado agregado de uma carga em lote (ponto de entrada do colaborador
/// de upload de arquivo).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BulkReport {
    pub inserted: usize,
    pub failed: usize,
}
