//! Squadify Charts
//!
//! Turns a team's role counts and field aggregate into renderer-agnostic
//! chart records. Nothing here draws; a renderer maps [`ChartKind`] onto its
//! own chart types, or ignores it.
//!
//! ```
//! use squadify_charts::{role_distribution, SeriesColor};
//! use squadify_domain::{LabelColors, LabelFilter, RoleCounts};
//!
//! let roles: RoleCounts = [("A", 2), ("B", 1)].into_iter().collect();
//! let colors: LabelColors = [("A", "#111"), ("B", "#222")].into_iter().collect();
//!
//! let chart = role_distribution(&roles, &LabelFilter::main_roles(), &colors);
//! assert_eq!(chart.categories, vec!["A", "B"]);
//! assert_eq!(chart.series[0].values, vec![2, 1]);
//! assert_eq!(
//!     chart.series[0].color,
//!     SeriesColor::PerCategory(vec![Some("#111".into()), Some("#222".into())])
//! );
//! ```

#![warn(missing_docs)]

mod chart;
mod generator;
mod keys;

pub use chart::{ChartKind, ChartSeries, Series, SeriesColor};
pub use generator::{
    confidence_trend, extract_charts, field_breakdown, role_distribution, team_charts,
    FILL_ALPHA, ROLE_DISTRIBUTION,
};
pub use keys::{distinct_inner_keys, sorted_keys};
