//! # 🌬️ aqm-core — Motor de Cálculo AQI
//!
//! Implementa o núcleo do sistema de monitoramento de qualidade do ar:
//! derivação do Índice de Qualidade do Ar (AQI, 0-500) a partir de
//! concentrações medidas de poluentes, pelo padrão EPA.
//!
//! ## Arquitetura
//!
//! Duas camadas puras:
//!
//! ### Modelo de Domínio
//!
//! Entidades imutáveis de valor ([`Location`], [`Pollutant`],
//! [`PollutantReading`], [`AirQualityReading`], [`AqiCategory`]) sem estado
//! compartilhado. A única operação é a classificação
//! [`AqiCategory::from_aqi`], função total sobre os inteiros.
//!
//! ### Calculador AQI
//!
//! Funções sem estado sobre tabelas de breakpoints regulatórias:
//!
//! - [`individual_aqi`] — interpolação linear por segmentos
//! - [`aggregate_aqi`] — dominância do pior caso (AQI máximo)
//! - [`build_reading`] — composição da leitura com categoria derivada
//!
//! Todo o núcleo é síncrono e livre de efeitos colaterais (exceto a leitura
//! opcional do relógio em [`build_reading`]); chamadas concorrentes para
//! localizações distintas são seguras por construção.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use aqm_core::{build_reading, Location, Pollutant, PollutantReading};
//!
//! let location = Location::new("New York", 40.7128, -74.0060);
//! let readings = vec![
//!     PollutantReading::new(Pollutant::Pm25, 25.0, "µg/m³", 0),
//!     PollutantReading::new(Pollutant::O3, 0.06, "ppm", 0),
//! ];
//!
//! let reading = build_reading(location, readings, Some(0), "Manual");
//! assert_eq!(reading.aqi, 78);
//! assert_eq!(reading.dominant_pollutant, Pollutant::Pm25);
//! ```
//!
//! ## Módulos
//!
//! - [`types`] - Modelo de domínio (entidades e categorias)
//! - [`calculator`] - Interpolação, agregação e composição de leituras
//! - [`collector`] - Fonte de dados simulada (sem I/O de rede)
//! - [`error`] - Tratamento de erros

pub mod calculator;
pub mod collector;
pub mod error;
pub mod types;

// Re-exportar tipos principais
pub use calculator::{
    aggregate_aqi, breakpoints, build_reading, current_timestamp, individual_aqi, Breakpoint,
    MAX_AQI,
};
pub use collector::{CityProfile, CollectorConfig, SimulatedCollector};
pub use error::{AqmError, AqmResult};
pub use types::{
    AirQualityAlert, AirQualityReading, AqiCategory, Location, Pollutant, PollutantReading,
};
