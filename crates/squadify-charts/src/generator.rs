//! Chart data generation

use crate::{distinct_inner_keys, sorted_keys, ChartKind, ChartSeries, Series, SeriesColor};
use squadify_domain::{
    confidence::CONFIDENCE_LEVELS, FieldValues, LabelColors, LabelFilter, RoleCounts, Team,
    CONFIDENCE_FIELD,
};
use squadify_extractor::{extract_team, TeamExtract};
use tracing::debug;

/// Name of the role distribution chart
pub const ROLE_DISTRIBUTION: &str = "Roles";

/// Alpha applied to confidence line fills
pub const FILL_ALPHA: f64 = 0.25;

fn color_of(colors: &LabelColors, label: &str) -> Option<String> {
    colors.get(label).map(str::to_string)
}

/// Role distribution chart
///
/// One category per role that passes `exclude`, sorted. The single series
/// carries one colour per category.
pub fn role_distribution(
    role_counts: &RoleCounts,
    exclude: &LabelFilter,
    colors: &LabelColors,
) -> ChartSeries {
    let categories = sorted_keys(role_counts.roles().filter(|role| exclude.allows_name(role)));

    let values = categories.iter().map(|role| role_counts.get(role)).collect();
    let palette = categories.iter().map(|role| color_of(colors, role)).collect();

    ChartSeries {
        name: ROLE_DISTRIBUTION.to_string(),
        kind: ChartKind::Doughnut,
        categories,
        series: vec![Series {
            label: String::new(),
            values,
            color: SeriesColor::PerCategory(palette),
            fill_color: None,
        }],
    }
}

/// Stacked breakdown of one field's values by role
///
/// Categories are the field's values, sorted; there is one series per role,
/// and combinations that never occur count 0.
pub fn field_breakdown(name: &str, field: &FieldValues, colors: &LabelColors) -> ChartSeries {
    let categories = sorted_keys(field.keys().map(String::as_str));

    let series = distinct_inner_keys(field)
        .into_iter()
        .map(|role| Series {
            values: categories
                .iter()
                .map(|value| field.get(value).map_or(0, |roles| roles.get(&role)))
                .collect(),
            color: SeriesColor::Single(color_of(colors, &role)),
            fill_color: None,
            label: role,
        })
        .collect();

    ChartSeries {
        name: name.to_string(),
        kind: ChartKind::StackedBar,
        categories,
        series,
    }
}

/// Confidence levels 1 to 5 by role
pub fn confidence_trend(field: &FieldValues, colors: &LabelColors) -> ChartSeries {
    confidence_chart(CONFIDENCE_FIELD, field, colors)
}

fn confidence_chart(name: &str, field: &FieldValues, colors: &LabelColors) -> ChartSeries {
    let categories: Vec<String> = CONFIDENCE_LEVELS.map(|level| level.to_string()).collect();

    let series = distinct_inner_keys(field)
        .into_iter()
        .map(|role| Series {
            values: categories
                .iter()
                .map(|level| field.get(level).map_or(0, |roles| roles.get(&role)))
                .collect(),
            color: SeriesColor::Single(color_of(colors, &role)),
            fill_color: colors.translucent(&role, FILL_ALPHA),
            label: role,
        })
        .collect();

    ChartSeries {
        name: name.to_string(),
        kind: ChartKind::Line,
        categories,
        series,
    }
}

/// Every chart for an extracted team
///
/// Role distribution first, then one chart per field in field-name order.
/// The field named `confidence_field` is drawn as a confidence trend.
pub fn extract_charts(
    extract: &TeamExtract,
    colors: &LabelColors,
    confidence_field: &str,
) -> Vec<ChartSeries> {
    let mut charts = vec![role_distribution(
        &extract.roles,
        &LabelFilter::main_roles(),
        colors,
    )];

    for (name, field) in extract.fields.iter() {
        if name == confidence_field {
            charts.push(confidence_chart(name, field, colors));
        } else {
            charts.push(field_breakdown(name, field, colors));
        }
    }

    charts
}

/// Every chart for a team
pub fn team_charts(team: &Team, colors: &LabelColors) -> Vec<ChartSeries> {
    let charts = extract_charts(&extract_team(team), colors, CONFIDENCE_FIELD);
    debug!("Generated {} charts for '{}'", charts.len(), team.name);
    charts
}
