//! Column names for raw and prepared passenger tables.

pub const PASSENGER_ID: &str = "PassengerId";
pub const SURVIVED: &str = "Survived";
pub const PCLASS: &str = "Pclass";
pub const NAME: &str = "Name";
pub const SEX: &str = "Sex";
pub const AGE: &str = "Age";
pub const SIBSP: &str = "SibSp";
pub const PARCH: &str = "Parch";
pub const TICKET: &str = "Ticket";
pub const FARE: &str = "Fare";
pub const CABIN: &str = "Cabin";
pub const EMBARKED: &str = "Embarked";

pub const TITLE: &str = "Title";
pub const CABIN_OCCUPANCY: &str = "CabinOccupancy";
pub const TICKET_SHARE_COUNT: &str = "TicketShareCount";
pub const LEVEL: &str = "Level";
pub const FARE_LOG10: &str = "FareLog10";
pub const AGE_IN_DECADES: &str = "AgeInDecades";

/// Columns of a freshly loaded passenger file, in file order.
pub const RAW_COLUMNS: [&str; 12] = [
    PASSENGER_ID,
    SURVIVED,
    PCLASS,
    NAME,
    SEX,
    AGE,
    SIBSP,
    PARCH,
    TICKET,
    FARE,
    CABIN,
    EMBARKED,
];

/// Columns added by the preparation pipeline, in the order they appear.
pub const DERIVED_COLUMNS: [&str; 6] = [
    TITLE,
    CABIN_OCCUPANCY,
    TICKET_SHARE_COUNT,
    LEVEL,
    FARE_LOG10,
    AGE_IN_DECADES,
];

/// Raw columns parsed as floating point before any other stage runs.
pub const NUMERIC_COLUMNS: [&str; 6] = [PASSENGER_ID, SURVIVED, AGE, SIBSP, PARCH, FARE];

/// Placeholder written into `Cabin` for passengers without a cabin.
pub const CABIN_SENTINEL: &str = "None";

/// Embarkation code used when the port is unknown (the majority port).
pub const DEFAULT_EMBARKED: &str = "S";

/// Replacement for titles that occur fewer than [`RARE_TITLE_THRESHOLD`] times.
pub const OTHER_TITLE: &str = "Other";

/// Titles seen fewer times than this across the table are folded into [`OTHER_TITLE`].
pub const RARE_TITLE_THRESHOLD: u32 = 5;

/// Returns every column a fully prepared table carries, in order.
pub fn prepared_columns() -> impl Iterator<Item = &'static str> {
    RAW_COLUMNS.into_iter().chain(DERIVED_COLUMNS)
}
