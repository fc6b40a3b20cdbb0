use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// School groups that get a menu document each week, in display order.
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Serialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[strum(serialize = "creche-m-verde")]
    #[serde(rename = "creche-m-verde")]
    CrecheMVerde,
    Creches,
    FundamentalBraga,
    FundamentalAnna,
    FundamentalAaugusto,
    FundamentalEsther,
    FundamentalGtl,
    Etec,
}

impl Category {
    /// The key used in the data file's `links` map.
    pub fn key(&self) -> &'static str {
        match self {
            Category::CrecheMVerde => "creche-m-verde",
            Category::Creches => "creches",
            Category::FundamentalBraga => "fundamental-braga",
            Category::FundamentalAnna => "fundamental-anna",
            Category::FundamentalAaugusto => "fundamental-aaugusto",
            Category::FundamentalEsther => "fundamental-esther",
            Category::FundamentalGtl => "fundamental-gtl",
            Category::Etec => "etec",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::CrecheMVerde => "CRECHE M.VERDE",
            Category::Creches => "CRECHES",
            Category::FundamentalBraga => "BRAGA, CAIC, CÉLIA, ALZIRA, PADRE",
            Category::FundamentalAnna => "ANNA, ANSELMO, M.AP., FAGGIONI, BRAGUETTO",
            Category::FundamentalAaugusto => "A.AUGUSTO, PORTINARI, M.VIRGÍNIA",
            Category::FundamentalEsther => "ESTHER VIANNA",
            Category::FundamentalGtl => "GTL, EESA, CASTELO, WASHINGTON",
            Category::Etec => "ETEC",
        }
    }

    /// Accessible name for the category's menu button.
    pub fn description(&self) -> &'static str {
        match self {
            Category::CrecheMVerde => "Cardápio da Creche Municipal Verde",
            Category::Creches => "Cardápio das demais Creches",
            Category::FundamentalBraga => "Cardápio das escolas Braga, Caic, Célia, Alzira, Padre",
            Category::FundamentalAnna => {
                "Cardápio das escolas Anna, Anselmo, Maria Aparecida, Faggioni, Braguetto"
            }
            Category::FundamentalAaugusto => {
                "Cardápio das escolas A. Augusto, Portinari, Maria Virgínia"
            }
            Category::FundamentalEsther => "Cardápio da Escola Fundamental Esther Vianna",
            Category::FundamentalGtl => "Cardápio das escolas GTL, EESA, Castelo, Washington",
            Category::Etec => "Cardápio da ETEC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn keys_round_trip_through_strum() {
        for category in Category::VARIANTS {
            assert_eq!(category.as_ref(), category.key());
            assert_eq!(Category::from_str(category.key()).unwrap(), *category);
        }
    }

    #[test]
    fn serializes_as_data_file_key() {
        let value = serde_json::to_value(Category::CrecheMVerde).unwrap();
        assert_eq!(value, serde_json::json!("creche-m-verde"));
    }
}
