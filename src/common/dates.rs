use chrono::NaiveDate;

use crate::common::error::AppError;

/// Normaliza uma data `YYYY-M-D` vinda da requisição para `NaiveDate`.
///
/// O parser do chrono aceita mês/dia com um dígito, então uma entrada como
/// `2022-6-1` é lida e re-emitida com zero à esquerda (`2022-06-01`) em
/// qualquer comparação ou serialização posterior.
pub fn normalize_date(input: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("invalid date: {input}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aceita_data_com_zero_a_esquerda() {
        let date = normalize_date("2022-06-13").unwrap();
        assert_eq!(date.to_string(), "2022-06-13");
    }

    #[test]
    fn preenche_mes_e_dia_com_um_digito() {
        let date = normalize_date("2022-6-1").unwrap();
        assert_eq!(date.to_string(), "2022-06-01");
    }

    #[test]
    fn rejeita_data_invalida() {
        let err = normalize_date("13/06/2022").unwrap_err();
        assert_eq!(err.to_string(), "invalid date: 13/06/2022");
    }
}
