//! Final type casts and display encodings.

use explorer_model::columns::{AGE_IN_DECADES, EMBARKED, PCLASS, SURVIVED};
use explorer_model::lookup::{DIED_LABEL, SURVIVED_LABEL, port_name};
use polars::prelude::*;

use crate::error::Result;
use crate::pipeline::PreparationStage;

/// Casts `AgeInDecades` and `Pclass` to Int32. Values that cannot be cast become null.
pub fn cast_to_integers(mut df: DataFrame) -> Result<DataFrame> {
    PreparationStage::CastToIntegers.check_columns(&df)?;

    for name in [AGE_IN_DECADES, PCLASS] {
        let cast = df.column(name)?.cast(&DataType::Int32)?;
        df.with_column(cast)?;
    }
    Ok(df)
}

/// Turns the numeric survival flag into `"Survived"` / `"Died"`.
///
/// Nulls stay null; any other number keeps its value, as text.
pub fn encode_survived(mut df: DataFrame) -> Result<DataFrame> {
    PreparationStage::EncodeSurvived.check_columns(&df)?;

    let flags = df.column(SURVIVED)?.cast(&DataType::Float64)?;
    let labels: Vec<Option<String>> = flags
        .f64()?
        .into_iter()
        .map(|flag| flag.map(survival_label))
        .collect();

    df.with_column(Column::new(SURVIVED.into(), labels))?;
    Ok(df)
}

fn survival_label(flag: f64) -> String {
    if flag == 1.0 {
        SURVIVED_LABEL.to_string()
    } else if flag == 0.0 {
        DIED_LABEL.to_string()
    } else {
        flag.to_string()
    }
}

/// Expands embarkation codes to port names. Unknown codes and nulls pass through.
pub fn expand_embarked(mut df: DataFrame) -> Result<DataFrame> {
    PreparationStage::ExpandEmbarked.check_columns(&df)?;

    let codes = df.column(EMBARKED)?.cast(&DataType::String)?;
    let ports: Vec<Option<&str>> = codes
        .str()?
        .into_iter()
        .map(|code| code.map(|code| port_name(code).unwrap_or(code)))
        .collect();

    df.with_column(Column::new(EMBARKED.into(), ports))?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(df: &DataFrame, name: &str) -> Vec<Option<String>> {
        df.column(name)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect()
    }

    #[test]
    fn test_cast_to_integers() {
        let df = DataFrame::new(vec![
            Column::new("AgeInDecades".into(), vec![Some(2.0), None, Some(0.0)]),
            Column::new("Pclass".into(), vec![Some("3"), Some("1"), Some("first")]),
        ])
        .unwrap();

        let result = cast_to_integers(df).unwrap();
        let decades: Vec<Option<i32>> = result
            .column("AgeInDecades")
            .unwrap()
            .i32()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(decades, vec![Some(2), None, Some(0)]);
        let classes: Vec<Option<i32>> = result
            .column("Pclass")
            .unwrap()
            .i32()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(classes, vec![Some(3), Some(1), None]);
    }

    #[test]
    fn test_encode_survived() {
        let df = DataFrame::new(vec![Column::new(
            "Survived".into(),
            vec![Some(1.0), Some(0.0), Some(1.0), Some(0.0), None],
        )])
        .unwrap();

        let result = encode_survived(df).unwrap();
        assert_eq!(
            strings(&result, "Survived"),
            vec![
                Some("Survived".to_string()),
                Some("Died".to_string()),
                Some("Survived".to_string()),
                Some("Died".to_string()),
                None,
            ]
        );
    }

    #[test]
    fn test_encode_survived_other_values_pass_through() {
        let df = DataFrame::new(vec![Column::new(
            "Survived".into(),
            vec![Some(2.0), Some(0.5)],
        )])
        .unwrap();

        let result = encode_survived(df).unwrap();
        assert_eq!(
            strings(&result, "Survived"),
            vec![Some("2".to_string()), Some("0.5".to_string())]
        );
    }

    #[test]
    fn test_expand_embarked() {
        let df = DataFrame::new(vec![Column::new(
            "Embarked".into(),
            vec![
                Some("S"),
                Some("C"),
                Some("Q"),
                Some("S"),
                None,
                Some("Unknown"),
            ],
        )])
        .unwrap();

        let result = expand_embarked(df).unwrap();
        assert_eq!(
            strings(&result, "Embarked"),
            vec![
                Some("Southampton".to_string()),
                Some("Cherbourg".to_string()),
                Some("Queenstown".to_string()),
                Some("Southampton".to_string()),
                None,
                Some("Unknown".to_string()),
            ]
        );
    }
}
