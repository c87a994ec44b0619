//! Coletor simulado de dados de qualidade do ar
//!
//! Fonte de dados em processo para testes e demonstração: sintetiza
//! medições plausíveis por cidade sem qualquer I/O de rede. A variação é
//! determinística (ciclos senoidais sobre um contador de amostras), o que
//! mantém os testes reprodutíveis sem dependência de RNG.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::calculator::{build_reading, current_timestamp};
use crate::error::{AqmError, AqmResult};
use crate::types::{AirQualityReading, Location, Pollutant, PollutantReading};

/// Perfil de poluição de uma cidade monitorada
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CityProfile {
    /// AQI típico da cidade
    pub base_aqi: f64,
    /// Amplitude da variação em torno do AQI base
    pub variation: f64,
}

/// Configuração do coletor simulado
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Escala aplicada à variação dos perfis (1.0 = padrão)
    pub variation_scale: f64,
    /// Perfil usado para localizações sem perfil registrado
    pub fallback_profile: CityProfile,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            variation_scale: 1.0,
            fallback_profile: CityProfile {
                base_aqi: 75.0,
                variation: 20.0,
            },
        }
    }
}

/// Coletor simulado de qualidade do ar
///
/// Gera leituras sintéticas por localização a partir de perfis de cidade
/// (AQI base + amplitude de variação). As concentrações derivam do AQI alvo
/// do instante: PM2.5 como poluente dominante típico, PM10 correlacionado,
/// O3 e NO2 com ciclos próprios.
#[derive(Debug, Clone)]
pub struct SimulatedCollector {
    config: CollectorConfig,
    profiles: HashMap<String, CityProfile>,
    sample_count: u64,
}

impl SimulatedCollector {
    /// Cria coletor com configuração e perfis padrão
    pub fn new() -> AqmResult<Self> {
        Self::with_config(CollectorConfig::default())
    }

    /// Cria coletor com configuração específica
    pub fn with_config(config: CollectorConfig) -> AqmResult<Self> {
        if config.variation_scale <= 0.0 {
            return Err(AqmError::InvalidConfig(
                "variation scale must be positive".into(),
            ));
        }

        if config.fallback_profile.base_aqi < 0.0 {
            return Err(AqmError::InvalidConfig(
                "fallback base AQI must be non-negative".into(),
            ));
        }

        Ok(Self {
            config,
            profiles: Self::default_profiles(),
            sample_count: 0,
        })
    }

    /// Perfis padrão das seis cidades monitoradas
    pub fn default_profiles() -> HashMap<String, CityProfile> {
        let mut profiles = HashMap::new();
        profiles.insert("New York".into(), CityProfile { base_aqi: 75.0, variation: 20.0 });
        profiles.insert("Los Angeles".into(), CityProfile { base_aqi: 95.0, variation: 25.0 });
        profiles.insert("Beijing".into(), CityProfile { base_aqi: 155.0, variation: 40.0 });
        profiles.insert("London".into(), CityProfile { base_aqi: 65.0, variation: 15.0 });
        profiles.insert("Delhi".into(), CityProfile { base_aqi: 180.0, variation: 50.0 });
        profiles.insert("Tokyo".into(), CityProfile { base_aqi: 55.0, variation: 15.0 });
        profiles
    }

    /// Conjunto padrão de localizações monitoradas
    pub fn monitoring_locations() -> Vec<Location> {
        vec![
            Location {
                name: "New York".into(),
                latitude: 40.7128,
                longitude: -74.0060,
                country: Some("USA".into()),
                city: Some("New York".into()),
                state: Some("NY".into()),
            },
            Location {
                name: "Los Angeles".into(),
                latitude: 34.0522,
                longitude: -118.2437,
                country: Some("USA".into()),
                city: Some("Los Angeles".into()),
                state: Some("CA".into()),
            },
            Location {
                name: "Beijing".into(),
                latitude: 39.9042,
                longitude: 116.4074,
                country: Some("China".into()),
                city: Some("Beijing".into()),
                state: Some("Beijing".into()),
            },
            Location {
                name: "London".into(),
                latitude: 51.5074,
                longitude: -0.1278,
                country: Some("UK".into()),
                city: Some("London".into()),
                state: Some("England".into()),
            },
            Location {
                name: "Delhi".into(),
                latitude: 28.7041,
                longitude: 77.1025,
                country: Some("India".into()),
                city: Some("Delhi".into()),
                state: Some("Delhi".into()),
            },
            Location {
                name: "Tokyo".into(),
                latitude: 35.6762,
                longitude: 139.6503,
                country: Some("Japan".into()),
                city: Some("Tokyo".into()),
                state: Some("Tokyo".into()),
            },
        ]
    }

    /// Registra ou substitui o perfil de uma localização
    pub fn set_profile(&mut self, name: impl Into<String>, profile: CityProfile) {
        self.profiles.insert(name.into(), profile);
    }

    /// Perfil da localização, se registrado
    pub fn profile(&self, name: &str) -> Option<&CityProfile> {
        self.profiles.get(name)
    }

    /// Contagem de amostras já geradas
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Gera a leitura atual simulada para a localização
    ///
    /// Determinística para uma mesma sequência de chamadas: a variação vem
    /// de ciclos senoidais sobre o contador de amostras, não de RNG.
    pub fn fetch_current(&mut self, location: &Location) -> AirQualityReading {
        let profile = self
            .profiles
            .get(&location.name)
            .copied()
            .unwrap_or(self.config.fallback_profile);

        let readings = self.generate_readings(&profile);
        self.sample_count += 1;

        build_reading(location.clone(), readings, None, "Simulated Data")
    }

    /// Sintetiza as medições de poluentes para o instante atual
    fn generate_readings(&self, profile: &CityProfile) -> Vec<PollutantReading> {
        use std::f64::consts::PI;

        let cycle = (self.sample_count as f64 * 0.1) % (2.0 * PI);
        let swing = profile.variation * self.config.variation_scale;

        // AQI alvo do instante, oscilando em torno do base
        let target_aqi = (profile.base_aqi + swing * cycle.sin()).max(0.0);
        let timestamp = current_timestamp();

        // PM2.5: poluente dominante típico, concentração proporcional ao alvo
        let pm25 = (target_aqi * 0.4 + 0.2 * swing * (cycle * 0.6).sin()).max(0.0);

        // PM10: correlacionado com PM2.5 (fator 1.2-2.0)
        let pm10 = (pm25 * (1.6 + 0.4 * (cycle * 0.5).cos())).max(0.0);

        // O3: 0.03-0.07 ppm com ciclo próprio
        let o3 = (0.05 + 0.02 * (cycle * 0.7).sin()).max(0.0);

        // NO2: 25-55 ppb
        let no2 = (40.0 + 15.0 * (cycle * 0.4).cos()).max(0.0);

        vec![
            PollutantReading::new(Pollutant::Pm25, pm25, "µg/m³", timestamp),
            PollutantReading::new(Pollutant::Pm10, pm10, "µg/m³", timestamp),
            PollutantReading::new(Pollutant::O3, o3, "ppm", timestamp),
            PollutantReading::new(Pollutant::No2, no2, "ppb", timestamp),
        ]
    }
}

impl Default for SimulatedCollector {
    fn default() -> Self {
        Self::new().expect("Default SimulatedCollector creation should not fail")
    }
}
