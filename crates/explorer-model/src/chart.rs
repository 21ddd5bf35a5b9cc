//! Declarative chart description.
//!
//! A [`ChartSpec`] carries everything a renderer needs to draw a strip plot
//! of passengers coloured by survival, with a box overlay per category and
//! tick labels annotated with counts and survival rates. Nothing here knows
//! how to draw; the chart spec is serialized to JSON and handed over.

use serde::Serialize;

use crate::category::CategoryValue;
use crate::columns::{AGE, EMBARKED, FARE_LOG10, PCLASS, SEX, TITLE};

/// Fields shown when hovering a point.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HoverInfo {
    pub name: Option<String>,
    pub sex: Option<String>,
    pub age: Option<f64>,
    pub pclass: Option<i64>,
    pub embarked: Option<String>,
}

/// One passenger in the strip plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub category: CategoryValue,
    pub value: f64,
    /// `"Survived"` or `"Died"`; drives the legend.
    pub survival: String,
    pub color: &'static str,
    pub hover: HoverInfo,
}

/// Five-number summary of one category's values, with Tukey whiskers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSummary {
    pub category: CategoryValue,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Smallest value not below `q1 - 1.5 * IQR`.
    pub lower_whisker: f64,
    /// Largest value not above `q3 + 1.5 * IQR`.
    pub upper_whisker: f64,
}

impl BoxSummary {
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Fixed styling applied to every chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartStyle {
    pub point_size: u32,
    pub point_opacity: f64,
    pub point_outline: &'static str,
    pub box_opacity: f64,
    pub box_fill: &'static str,
    pub box_line: &'static str,
    pub box_line_width: f64,
    pub width: u32,
    pub height: u32,
    pub template: &'static str,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            point_size: 4,
            point_opacity: 0.6,
            point_outline: "white",
            box_opacity: 0.7,
            box_fill: "rgba(211,211,211,0.3)",
            box_line: "black",
            box_line_width: 1.5,
            width: 800,
            height: 600,
            template: "plotly_white",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub category_column: String,
    pub value_column: String,
    /// Distinct categories, ascending. Parallel to `tick_labels`.
    pub categories: Vec<CategoryValue>,
    pub tick_labels: Vec<String>,
    pub points: Vec<ChartPoint>,
    pub boxes: Vec<BoxSummary>,
    pub style: ChartStyle,
}

/// A canned question about the passenger data and the chart that answers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartTopic {
    pub key: &'static str,
    pub heading: &'static str,
    pub commentary: &'static str,
    pub category_column: &'static str,
    pub value_column: &'static str,
}

pub const EXPLORATION_TOPICS: [ChartTopic; 4] = [
    ChartTopic {
        key: "women-and-children",
        heading: "Women and children first?",
        commentary: "Females were clearly given priority. The trend is far less convincing for children.",
        category_column: SEX,
        value_column: AGE,
    },
    ChartTopic {
        key: "wealth",
        heading: "Did wealth have an influence?",
        commentary: "Survival rate is significantly higher for first class than for third class.",
        category_column: PCLASS,
        value_column: FARE_LOG10,
    },
    ChartTopic {
        key: "embarkation",
        heading: "Why did port of embarkation have an impact?",
        commentary: "Passengers boarding in Cherbourg had a higher survival rate.",
        category_column: EMBARKED,
        value_column: AGE,
    },
    ChartTopic {
        key: "occupation",
        heading: "All the Reverends perished!",
        commentary: "Every reverend on board died.",
        category_column: TITLE,
        value_column: AGE,
    },
];

impl ChartTopic {
    /// Looks up a topic by its key.
    pub fn find(key: &str) -> Option<&'static ChartTopic> {
        EXPLORATION_TOPICS.iter().find(|topic| topic.key == key)
    }
}
