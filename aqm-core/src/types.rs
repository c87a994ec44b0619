//! Tipos do modelo de domínio de qualidade do ar

use serde::{Deserialize, Serialize};
use std::fmt;

/// Poluentes atmosféricos suportados
///
/// Enumeração fechada: cada variante possui uma tabela de breakpoints
/// registrada em [`crate::calculator::breakpoints`]. Adicionar um poluente
/// exige adicionar ambos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    Pm25,
    Pm10,
    O3,
    No2,
    So2,
    Co,
}

impl Pollutant {
    /// Rótulo de exibição do poluente
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pm25 => "PM2.5",
            Self::Pm10 => "PM10",
            Self::O3 => "O3",
            Self::No2 => "NO2",
            Self::So2 => "SO2",
            Self::Co => "CO",
        }
    }

    /// Unidade esperada pela tabela de breakpoints do poluente
    ///
    /// Informativa: o campo `unit` de [`PollutantReading`] não é validado
    /// contra este valor.
    pub const fn expected_unit(&self) -> &'static str {
        match self {
            Self::Pm25 | Self::Pm10 => "µg/m³",
            Self::O3 | Self::Co => "ppm",
            Self::No2 | Self::So2 => "ppb",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categorias do Índice de Qualidade do Ar (padrão EPA)
///
/// Seis faixas ordenadas de severidade, cada uma com intervalo AQI
/// inclusivo `[min, max]` e cor de exibição. As faixas particionam
/// `[0, 500]` sem lacunas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    /// Todas as categorias em ordem crescente de severidade
    pub const ALL: [Self; 6] = [
        Self::Good,
        Self::Moderate,
        Self::UnhealthySensitive,
        Self::Unhealthy,
        Self::VeryUnhealthy,
        Self::Hazardous,
    ];

    /// Rótulo de exibição da categoria
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// Limite inferior (inclusivo) da faixa AQI
    pub const fn min_aqi(&self) -> u16 {
        match self {
            Self::Good => 0,
            Self::Moderate => 51,
            Self::UnhealthySensitive => 101,
            Self::Unhealthy => 151,
            Self::VeryUnhealthy => 201,
            Self::Hazardous => 301,
        }
    }

    /// Limite superior (inclusivo) da faixa AQI
    pub const fn max_aqi(&self) -> u16 {
        match self {
            Self::Good => 50,
            Self::Moderate => 100,
            Self::UnhealthySensitive => 150,
            Self::Unhealthy => 200,
            Self::VeryUnhealthy => 300,
            Self::Hazardous => 500,
        }
    }

    /// Cor de exibição (hex RGB, convenção EPA)
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Good => "#00E400",
            Self::Moderate => "#FFFF00",
            Self::UnhealthySensitive => "#FF7E00",
            Self::Unhealthy => "#FF0000",
            Self::VeryUnhealthy => "#8F3F97",
            Self::Hazardous => "#7E0023",
        }
    }

    /// Classifica um valor AQI na sua categoria
    ///
    /// Função total sobre todos os inteiros: valores acima de 500 caem na
    /// faixa Hazardous (teto, não erro) e valores negativos são tratados
    /// como Good (piso).
    pub fn from_aqi(aqi: i32) -> Self {
        if aqi < 0 {
            return Self::Good;
        }

        for category in Self::ALL {
            if aqi >= i32::from(category.min_aqi()) && aqi <= i32::from(category.max_aqi()) {
                return category;
            }
        }

        // Acima de 500
        Self::Hazardous
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Localização geográfica monitorada
///
/// Identidade imutável: o nome é a chave dentro de um conjunto de
/// monitoramento. Latitude e longitude não passam por validação de faixa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl Location {
    /// Cria localização sem metadados opcionais
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            country: None,
            city: None,
            state: None,
        }
    }
}

/// Medição individual de um poluente
///
/// Efêmera: produzida por uma fonte de dados e consumida imediatamente
/// pelo calculador. O timestamp é em segundos Unix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantReading {
    pub pollutant: Pollutant,
    /// Concentração na unidade esperada pelo poluente
    pub concentration: f64,
    /// Rótulo de unidade (informativo, não validado)
    pub unit: String,
    pub timestamp: u64,
}

impl PollutantReading {
    pub fn new(
        pollutant: Pollutant,
        concentration: f64,
        unit: impl Into<String>,
        timestamp: u64,
    ) -> Self {
        Self {
            pollutant,
            concentration,
            unit: unit.into(),
            timestamp,
        }
    }
}

/// Leitura completa de qualidade do ar para uma localização
///
/// Resultado agregado de um instante: AQI geral, poluente dominante,
/// categoria derivada e as medições subjacentes. Construída uma única vez
/// e nunca mutada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityReading {
    pub location: Location,
    /// AQI geral (0-500)
    pub aqi: u16,
    pub dominant_pollutant: Pollutant,
    /// Sempre igual a `AqiCategory::from_aqi(aqi)` (derivada no construtor)
    pub category: AqiCategory,
    pub readings: Vec<PollutantReading>,
    pub timestamp: u64,
    /// Proveniência dos dados (ex.: qual coletor produziu a leitura)
    pub source: String,
}

impl AirQualityReading {
    /// Constrói a leitura derivando a categoria do AQI
    ///
    /// A categoria nunca é definida independentemente do AQI.
    pub fn new(
        location: Location,
        aqi: u16,
        dominant_pollutant: Pollutant,
        readings: Vec<PollutantReading>,
        timestamp: u64,
        source: impl Into<String>,
    ) -> Self {
        Self {
            location,
            aqi,
            dominant_pollutant,
            category: AqiCategory::from_aqi(i32::from(aqi)),
            readings,
            timestamp,
            source: source.into(),
        }
    }

    /// Deriva um alerta se o AQI atingir o limiar informado
    pub fn alert_above(&self, threshold: u16) -> Option<AirQualityAlert> {
        if self.aqi < threshold {
            return None;
        }

        Some(AirQualityAlert {
            location: self.location.clone(),
            aqi: self.aqi,
            category: self.category,
            message: format!(
                "Air quality {}: AQI {} at {} (dominant {})",
                self.category.label(),
                self.aqi,
                self.location.name,
                self.dominant_pollutant
            ),
            timestamp: self.timestamp,
            active: true,
        })
    }
}

/// Alerta de qualidade do ar degradada
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityAlert {
    pub location: Location,
    pub aqi: u16,
    pub category: AqiCategory,
    pub message: String,
    pub timestamp: u64,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pollutant_labels() {
        assert_eq!(Pollutant::Pm25.label(), "PM2.5");
        assert_eq!(Pollutant::Pm10.label(), "PM10");
        assert_eq!(Pollutant::O3.label(), "O3");
        assert_eq!(Pollutant::No2.label(), "NO2");
        assert_eq!(Pollutant::So2.label(), "SO2");
        assert_eq!(Pollutant::Co.label(), "CO");
    }

    #[test]
    fn test_pollutant_expected_units() {
        assert_eq!(Pollutant::Pm25.expected_unit(), "µg/m³");
        assert_eq!(Pollutant::O3.expected_unit(), "ppm");
        assert_eq!(Pollutant::So2.expected_unit(), "ppb");
    }

    #[test]
    fn test_category_ranges_partition_0_500() {
        // Faixas contíguas sem lacunas
        let mut expected_min = 0u16;
        for category in AqiCategory::ALL {
            assert_eq!(category.min_aqi(), expected_min);
            assert!(category.max_aqi() >= category.min_aqi());
            expected_min = category.max_aqi() + 1;
        }
        assert_eq!(AqiCategory::Hazardous.max_aqi(), 500);
    }

    #[test]
    fn test_from_aqi_boundaries() {
        let cases = [
            (0, AqiCategory::Good),
            (50, AqiCategory::Good),
            (51, AqiCategory::Moderate),
            (100, AqiCategory::Moderate),
            (101, AqiCategory::UnhealthySensitive),
            (150, AqiCategory::UnhealthySensitive),
            (151, AqiCategory::Unhealthy),
            (200, AqiCategory::Unhealthy),
            (201, AqiCategory::VeryUnhealthy),
            (300, AqiCategory::VeryUnhealthy),
            (301, AqiCategory::Hazardous),
            (500, AqiCategory::Hazardous),
        ];

        for (aqi, expected) in cases {
            assert_eq!(
                AqiCategory::from_aqi(aqi),
                expected,
                "AQI {aqi} should be {expected}"
            );
        }
    }

    #[test]
    fn test_from_aqi_above_ceiling_is_hazardous() {
        assert_eq!(AqiCategory::from_aqi(501), AqiCategory::Hazardous);
        assert_eq!(AqiCategory::from_aqi(600), AqiCategory::Hazardous);
        assert_eq!(AqiCategory::from_aqi(i32::MAX), AqiCategory::Hazardous);
    }

    #[test]
    fn test_from_aqi_negative_is_good() {
        assert_eq!(AqiCategory::from_aqi(-1), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(i32::MIN), AqiCategory::Good);
    }

    #[test]
    fn test_category_ordering() {
        assert!(AqiCategory::Good < AqiCategory::Moderate);
        assert!(AqiCategory::VeryUnhealthy < AqiCategory::Hazardous);
    }

    #[test]
    fn test_category_colors() {
        assert_eq!(AqiCategory::Good.color(), "#00E400");
        assert_eq!(AqiCategory::Hazardous.color(), "#7E0023");
    }

    #[test]
    fn test_location_new() {
        let location = Location::new("New York", 40.7128, -74.0060);
        assert_eq!(location.name, "New York");
        assert!(location.country.is_none());
    }

    #[test]
    fn test_reading_category_derived_from_aqi() {
        let location = Location::new("Test City", 0.0, 0.0);
        let reading = AirQualityReading::new(location, 175, Pollutant::Pm25, vec![], 0, "Test");

        assert_eq!(reading.category, AqiCategory::Unhealthy);
        assert_eq!(reading.category, AqiCategory::from_aqi(i32::from(reading.aqi)));
    }

    #[test]
    fn test_alert_above_threshold() {
        let location = Location::new("Delhi", 28.7041, 77.1025);
        let reading = AirQualityReading::new(location, 180, Pollutant::Pm25, vec![], 42, "Test");

        let alert = reading.alert_above(100).expect("AQI 180 should alert at 100");
        assert_eq!(alert.aqi, 180);
        assert_eq!(alert.category, AqiCategory::Unhealthy);
        assert!(alert.active);
        assert!(alert.message.contains("Unhealthy"));
        assert!(alert.message.contains("Delhi"));
        assert_eq!(alert.timestamp, 42);
    }

    #[test]
    fn test_alert_below_threshold() {
        let location = Location::new("Tokyo", 35.6762, 139.6503);
        let reading = AirQualityReading::new(location, 55, Pollutant::O3, vec![], 0, "Test");
        assert!(reading.alert_above(100).is_none());
    }

    #[test]
    fn test_serialization() {
        let location = Location::new("London", 51.5074, -0.1278);
        let readings = vec![PollutantReading::new(Pollutant::Pm25, 12.0, "µg/m³", 7)];
        let reading = AirQualityReading::new(location, 50, Pollutant::Pm25, readings, 7, "Test");

        let json = serde_json::to_string(&reading).unwrap();
        let deserialized: AirQualityReading = serde_json::from_str(&json).unwrap();
        assert_eq!(reading, deserialized);
    }
}
