use crate::format::{format_decimal, format_eur, format_size};
use clap::Args;
use mietspiegel::error::AppError;
use mietspiegel::estimate::{Estimate, EstimateSession, EstimateStatus};
use mietspiegel::tables::{ReferenceTables, YearBand};
use serde::Serialize;
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::warn;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Street name as listed by `mietspiegel streets`
    #[arg(long)]
    pub(crate) street: String,
    /// House number
    #[arg(long)]
    pub(crate) house_number: u32,
    /// Exact construction year
    #[arg(long)]
    pub(crate) year: Option<i32>,
    /// Construction period used when no exact year is given (e.g. 1961-1977)
    #[arg(long, value_parser = crate::infra::parse_year_band)]
    pub(crate) year_band: Option<YearBand>,
    /// Living area in m²
    #[arg(long)]
    pub(crate) size: f64,
    /// Feature id to include; repeat for several features
    #[arg(long = "feature")]
    pub(crate) features: Vec<String>,
    /// Print the estimate as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct EstimateResponse<'a> {
    estimate: &'a Estimate,
    result: EstimateStatus,
}

pub(crate) fn run_estimate(
    tables: Arc<ReferenceTables>,
    args: EstimateArgs,
) -> Result<(), AppError> {
    let EstimateArgs {
        street,
        house_number,
        year,
        year_band,
        size,
        features,
        json,
    } = args;

    let mut session = EstimateSession::new(tables);
    session.set_street(Some(street));
    session.set_house_number(Some(house_number));
    session.set_construction_year(year);
    session.set_fallback_year_band(year_band);
    session.set_size(Some(size));
    for feature in &features {
        if session.tables().features.find(feature).is_none() {
            warn!(feature = %feature, "feature id not in catalog; it contributes no points");
        }
        session.toggle_feature(feature, true);
    }

    if json {
        let response = EstimateResponse {
            estimate: session.estimate(),
            result: session.status(),
        };
        let rendered = serde_json::to_string_pretty(&response)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{rendered}");
    } else {
        print!("{}", render_estimate(session.estimate()));
    }
    Ok(())
}

/// Text result block: selected points, per-m² band, totals, and the individual rent.
pub(crate) fn render_estimate(estimate: &Estimate) -> String {
    let mut out = String::new();

    if estimate.point_total() != 0 {
        writeln!(out, "ausgewählte Punkte: {}", estimate.point_total()).expect("write points");
    }

    let summary = match estimate.status() {
        EstimateStatus::Ready(summary) => summary,
        EstimateStatus::AddressNotFound => {
            out.push_str("Adresse nicht vorhanden.\n");
            return out;
        }
        EstimateStatus::NoMatchingBracket => {
            out.push_str("Kein Mietspiegelwert für Baujahr und Größe vorhanden.\n");
            return out;
        }
        EstimateStatus::Incomplete => {
            out.push_str("Adresse nicht vorhanden oder Eingabe ungültig.\n");
            return out;
        }
    };

    writeln!(out, "Lage: {}", summary.location_tier).expect("write location");
    writeln!(
        out,
        "{:<22}{:>16}{:>16}{:>16}",
        "", "Unterer Spannenwert", "Mittelwert", "Oberer Spannenwert"
    )
    .expect("write header");
    writeln!(
        out,
        "{:<22}{:>16}{:>16}{:>16}",
        "pro m²",
        format_eur(summary.per_sqm.lower),
        format_eur(summary.per_sqm.mid),
        format_eur(summary.per_sqm.upper)
    )
    .expect("write per m² row");
    writeln!(
        out,
        "{:<22}{:>16}{:>16}{:>16}",
        format!("Gesamt {} m²", format_size(summary.size)),
        format_eur(summary.totals.lower),
        format_eur(summary.totals.mid),
        format_eur(summary.totals.upper)
    )
    .expect("write totals row");
    writeln!(
        out,
        "individuell Gesamt inkl. Merkmale: {} ({} pro m², Rabatt {})",
        format_eur(summary.grand_total),
        format_eur(summary.per_sqm_total),
        format_eur(summary.discount_per_sqm)
    )
    .expect("write individual total");
    if let Some(reduction) = summary.location_reduction {
        writeln!(
            out,
            "Anmerkung: {} €/m² Minderung wegen \"einfacher\" Lage",
            format_decimal(reduction, 3)
        )
        .expect("write location note");
    }
    out
}
