use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use yieldcast::{
    types::{DEFAULT_CROP, DEFAULT_REGION, DEFAULT_SCENARIO, DEFAULT_YEAR},
    FailureKind, Locale, SelectionTuple, ViewModel,
};

#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub result: T,
}

/// `?lang=` on its own.
#[derive(Debug, Deserialize, Default)]
pub struct LangParams {
    pub lang: Option<String>,
}

impl LangParams {
    pub fn locale(&self) -> Result<Locale, AppError> {
        parse_locale(self.lang.as_deref())
    }
}

/// Query parameters describing a selection. Missing fields take the
/// default selection's values.
#[derive(Debug, Deserialize, Default)]
pub struct ForecastParams {
    pub crop: Option<String>,
    pub region: Option<String>,
    /// Kept as text so a bad value yields a JSON error body.
    pub year: Option<String>,
    pub scenario: Option<String>,
    pub lang: Option<String>,
}

impl ForecastParams {
    pub fn selection(&self) -> Result<SelectionTuple, AppError> {
        let year = match self.year.as_deref() {
            None | Some("") => DEFAULT_YEAR,
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .map_err(|_| AppError::BadRequest(format!("Invalid year '{raw}'.")))?,
        };
        Ok(SelectionTuple::new(
            self.crop.as_deref().unwrap_or(DEFAULT_CROP),
            self.region.as_deref().unwrap_or(DEFAULT_REGION),
            year,
            self.scenario.as_deref().unwrap_or(DEFAULT_SCENARIO),
        ))
    }

    pub fn locale(&self) -> Result<Locale, AppError> {
        parse_locale(self.lang.as_deref())
    }
}

/// `?year=` for the historical prediction route.
#[derive(Debug, Deserialize, Default)]
pub struct YearParams {
    pub year: Option<String>,
}

impl YearParams {
    pub fn year(&self) -> Result<i32, AppError> {
        match self.year.as_deref().map(str::trim) {
            None | Some("") => Err(AppError::BadRequest("Missing 'year'.".to_string())),
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::BadRequest(format!("Invalid year '{raw}'."))),
        }
    }
}

fn parse_locale(lang: Option<&str>) -> Result<Locale, AppError> {
    match lang {
        None | Some("") => Ok(Locale::default()),
        Some(raw) => raw.parse().map_err(AppError::BadRequest),
    }
}

#[derive(Serialize, Debug)]
pub struct ForecastResponse {
    pub selection: SelectionTuple,
    pub eligible: bool,
    pub view: ViewModel,
    pub status_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<FailureKind>,
}
