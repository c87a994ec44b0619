//! Cálculo do Índice de Qualidade do Ar (AQI) pelo padrão EPA
//!
//! Três operações puras e sem estado:
//!
//! 1. [`individual_aqi`] — interpolação linear por segmentos sobre a tabela
//!    de breakpoints do poluente
//! 2. [`aggregate_aqi`] — agregação multi-poluente por dominância do pior
//!    caso (AQI máximo)
//! 3. [`build_reading`] — composição da leitura completa com categoria
//!    derivada

use crate::error::{AqmError, AqmResult};
use crate::types::{AirQualityReading, Location, Pollutant, PollutantReading};

/// Teto do índice: nenhuma leitura excede este valor
pub const MAX_AQI: u16 = 500;

/// Segmento de uma tabela de breakpoints EPA
///
/// Mapeia a faixa de concentração `[c_low, c_high]` para a faixa de índice
/// `[i_low, i_high]` por interpolação linear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub c_low: f64,
    pub c_high: f64,
    pub i_low: u16,
    pub i_high: u16,
}

const fn bp(c_low: f64, c_high: f64, i_low: u16, i_high: u16) -> Breakpoint {
    Breakpoint {
        c_low,
        c_high,
        i_low,
        i_high,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TABELAS DE BREAKPOINTS EPA (constantes regulatórias)
// ═══════════════════════════════════════════════════════════════════════════════

/// PM2.5 em µg/m³ (média de 24h)
const PM25_BREAKPOINTS: [Breakpoint; 6] = [
    bp(0.0, 12.0, 0, 50),
    bp(12.1, 35.4, 51, 100),
    bp(35.5, 55.4, 101, 150),
    bp(55.5, 150.4, 151, 200),
    bp(150.5, 250.4, 201, 300),
    bp(250.5, 500.4, 301, 500),
];

/// PM10 em µg/m³ (média de 24h)
const PM10_BREAKPOINTS: [Breakpoint; 6] = [
    bp(0.0, 54.0, 0, 50),
    bp(55.0, 154.0, 51, 100),
    bp(155.0, 254.0, 101, 150),
    bp(255.0, 354.0, 151, 200),
    bp(355.0, 424.0, 201, 300),
    bp(425.0, 604.0, 301, 500),
];

/// O3 em ppm (média de 8h; faixas altas usam valores de 1h)
const O3_BREAKPOINTS: [Breakpoint; 6] = [
    bp(0.000, 0.054, 0, 50),
    bp(0.055, 0.070, 51, 100),
    bp(0.071, 0.085, 101, 150),
    bp(0.086, 0.105, 151, 200),
    bp(0.106, 0.200, 201, 300),
    bp(0.201, 0.604, 301, 500),
];

/// NO2 em ppb (média de 1h)
const NO2_BREAKPOINTS: [Breakpoint; 6] = [
    bp(0.0, 53.0, 0, 50),
    bp(54.0, 100.0, 51, 100),
    bp(101.0, 360.0, 101, 150),
    bp(361.0, 649.0, 151, 200),
    bp(650.0, 1249.0, 201, 300),
    bp(1250.0, 2049.0, 301, 500),
];

/// SO2 em ppb (média de 1h)
const SO2_BREAKPOINTS: [Breakpoint; 6] = [
    bp(0.0, 35.0, 0, 50),
    bp(36.0, 75.0, 51, 100),
    bp(76.0, 185.0, 101, 150),
    bp(186.0, 304.0, 151, 200),
    bp(305.0, 604.0, 201, 300),
    bp(605.0, 1004.0, 301, 500),
];

/// CO em ppm (média de 8h)
const CO_BREAKPOINTS: [Breakpoint; 6] = [
    bp(0.0, 4.4, 0, 50),
    bp(4.5, 9.4, 51, 100),
    bp(9.5, 12.4, 101, 150),
    bp(12.5, 15.4, 151, 200),
    bp(15.5, 30.4, 201, 300),
    bp(30.5, 50.4, 301, 500),
];

/// Tabela de breakpoints registrada para o poluente
///
/// Retorna `None` para poluentes sem tabela. Com a enumeração fechada atual
/// todas as variantes possuem tabela; a busca permanece defensiva caso o
/// conjunto de poluentes se torne extensível.
pub fn breakpoints(pollutant: Pollutant) -> Option<&'static [Breakpoint; 6]> {
    match pollutant {
        Pollutant::Pm25 => Some(&PM25_BREAKPOINTS),
        Pollutant::Pm10 => Some(&PM10_BREAKPOINTS),
        Pollutant::O3 => Some(&O3_BREAKPOINTS),
        Pollutant::No2 => Some(&NO2_BREAKPOINTS),
        Pollutant::So2 => Some(&SO2_BREAKPOINTS),
        Pollutant::Co => Some(&CO_BREAKPOINTS),
    }
}

/// Calcula o AQI de um único poluente pela fórmula EPA
///
/// `AQI = (I_high - I_low) / (C_high - C_low) * (C - C_low) + I_low`,
/// arredondado para o inteiro mais próximo (empates afastam-se de zero,
/// semântica de `f64::round`).
///
/// Casos de borda definidos:
/// - concentração abaixo do primeiro segmento (negativa) → 0 (piso)
/// - concentração acima de todos os segmentos → 500 (teto, não erro)
/// - concentração em uma lacuna entre segmentos (ex.: PM2.5 entre 12.0 e
///   12.1) → interpolada no próximo segmento
///
/// # Errors
///
/// [`AqmError::UnsupportedPollutant`] se o poluente não possui tabela
/// registrada.
pub fn individual_aqi(pollutant: Pollutant, concentration: f64) -> AqmResult<u16> {
    let table = breakpoints(pollutant).ok_or(AqmError::UnsupportedPollutant(pollutant))?;

    // Abaixo do primeiro segmento: piso em 0
    if concentration < table[0].c_low {
        return Ok(0);
    }

    // Primeiro segmento cujo limite superior alcança a concentração
    for segment in table {
        if concentration <= segment.c_high {
            let slope =
                f64::from(segment.i_high - segment.i_low) / (segment.c_high - segment.c_low);
            let aqi = slope * (concentration - segment.c_low) + f64::from(segment.i_low);
            return Ok(aqi.round().clamp(0.0, f64::from(MAX_AQI)) as u16);
        }
    }

    // Acima de todos os segmentos: teto
    Ok(MAX_AQI)
}

/// Agrega múltiplas medições no AQI geral e no poluente dominante
///
/// O AQI geral é o máximo dos AQIs individuais; o dominante é o poluente
/// que o produziu. Medições de poluentes sem tabela são ignoradas em vez de
/// falhar o lote. Entrada vazia (ou toda ignorada) retorna o padrão
/// definido `(0, PM2.5)`.
///
/// Empates no máximo são resolvidos pela ordem de chegada: vence o poluente
/// que atingiu o máximo primeiro na sequência de entrada.
pub fn aggregate_aqi(readings: &[PollutantReading]) -> (u16, Pollutant) {
    let mut dominant: Option<(u16, Pollutant)> = None;

    for reading in readings {
        // Poluente sem tabela: ignora a medição em vez de falhar o lote
        let Ok(aqi) = individual_aqi(reading.pollutant, reading.concentration) else {
            continue;
        };

        match dominant {
            Some((max_aqi, _)) if aqi <= max_aqi => {}
            _ => dominant = Some((aqi, reading.pollutant)),
        }
    }

    dominant.unwrap_or((0, Pollutant::Pm25))
}

/// Compõe a leitura completa de qualidade do ar
///
/// Agrega as medições, classifica o AQI resultante e constrói a
/// [`AirQualityReading`]. O timestamp é injetável para testabilidade;
/// `None` usa o relógio do sistema ([`current_timestamp`]), o único ponto
/// em que o tempo de parede entra no núcleo.
pub fn build_reading(
    location: Location,
    readings: Vec<PollutantReading>,
    timestamp: Option<u64>,
    source: impl Into<String>,
) -> AirQualityReading {
    let timestamp = timestamp.unwrap_or_else(current_timestamp);
    let (aqi, dominant_pollutant) = aggregate_aqi(&readings);

    AirQualityReading::new(location, aqi, dominant_pollutant, readings, timestamp, source)
}

/// Timestamp atual em segundos Unix
pub fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
