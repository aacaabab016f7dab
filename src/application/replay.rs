use crate::application::{
    HoverChangeResult, NavigationResult, ReconcileResult, SelectionChangeResult, SelectionEngine,
};
use crate::domain::NavDirection;
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::Serialize;
use std::str::FromStr;

/// One host interaction, as written on the command line.
///
/// `activate:2024-03-10`, `hover:2024-03-05`, `next`, `prev`,
/// `external:2024-03-01,2024-03-02` (or `external:` to clear).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayEvent {
    Activate(NaiveDate),
    Hover(NaiveDate),
    Navigate(NavDirection),
    External(Vec<NaiveDate>),
}

impl FromStr for ReplayEvent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, argument) = match s.split_once(':') {
            Some((kind, argument)) => (kind, Some(argument)),
            None => (s, None),
        };

        match (kind.trim().to_lowercase().as_str(), argument) {
            ("next", None) => Ok(Self::Navigate(NavDirection::Next)),
            ("prev", None) => Ok(Self::Navigate(NavDirection::Prev)),
            ("activate", Some(date)) => Ok(Self::Activate(parse_date(date)?)),
            ("hover", Some(date)) => Ok(Self::Hover(parse_date(date)?)),
            ("external", Some(dates)) => Ok(Self::External(parse_date_list(dates)?)),
            _ => bail!("Unrecognised event '{}'", s),
        }
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// `YYYY-MM`, resolved to the 1st of that month
pub fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))
}

pub fn parse_date_list(s: &str) -> Result<Vec<NaiveDate>> {
    s.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(parse_date)
        .collect()
}

/// What happened to one replayed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StepOutcome {
    Activate(SelectionChangeResult),
    Hover(HoverChangeResult),
    Navigate(NavigationResult),
    External(ReconcileResult),
    /// A renderer would never have forwarded this pointer event
    Skipped { date: NaiveDate, reason: String },
}

/// Feeds `event` to the engine the way a renderer would: clicks on days
/// that are hidden or not actionable are dropped unless `force`. Hovers
/// only need the day to be on screen, so a pending range still previews
/// across disabled, past and future days.
pub fn apply(
    engine: &mut SelectionEngine,
    event: &ReplayEvent,
    force: bool,
) -> Result<StepOutcome> {
    if !force {
        let blocked = match event {
            ReplayEvent::Activate(date) => blocked_reason(engine, *date).map(|r| (*date, r)),
            ReplayEvent::Hover(date) if !is_visible(engine, *date) => {
                Some((*date, NOT_VISIBLE.to_string()))
            }
            _ => None,
        };
        if let Some((date, reason)) = blocked {
            return Ok(StepOutcome::Skipped { date, reason });
        }
    }

    Ok(match event {
        ReplayEvent::Activate(date) => StepOutcome::Activate(engine.on_activate(*date)?),
        ReplayEvent::Hover(date) => StepOutcome::Hover(engine.on_hover(*date)?),
        ReplayEvent::Navigate(direction) => StepOutcome::Navigate(engine.on_navigate(*direction)),
        ReplayEvent::External(dates) => {
            StepOutcome::External(engine.reconcile_external_selection(dates.clone()))
        }
    })
}

const NOT_VISIBLE: &str = "not in a visible month";

fn is_visible(engine: &SelectionEngine, date: NaiveDate) -> bool {
    engine
        .view_model()
        .months
        .iter()
        .any(|grid| grid.day(date).is_some())
}

fn blocked_reason(engine: &SelectionEngine, date: NaiveDate) -> Option<String> {
    let view = engine.view_model();
    let Some(day) = view.months.iter().find_map(|grid| grid.day(date)) else {
        return Some(NOT_VISIBLE.to_string());
    };

    if day.is_actionable() {
        None
    } else if day.disabled {
        Some("disabled".to_string())
    } else if day.past {
        Some("past days are not allowed".to_string())
    } else {
        Some("future days are not allowed".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Availability;
    use crate::infrastructure::test_utils::test_harness::*;

    fn step(engine: &mut SelectionEngine, event: ReplayEvent) -> StepOutcome {
        apply(engine, &event, false).unwrap()
    }

    #[test]
    fn test_parse_events() {
        assert_eq!(
            "activate:2024-03-10".parse::<ReplayEvent>().unwrap(),
            ReplayEvent::Activate(date(2024, 3, 10))
        );
        assert_eq!(
            "NEXT".parse::<ReplayEvent>().unwrap(),
            ReplayEvent::Navigate(NavDirection::Next)
        );
        assert_eq!(
            "external:".parse::<ReplayEvent>().unwrap(),
            ReplayEvent::External(Vec::new())
        );
        assert_eq!(
            "external:2024-03-01, 2024-03-02".parse::<ReplayEvent>().unwrap(),
            ReplayEvent::External(vec![date(2024, 3, 1), date(2024, 3, 2)])
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("jump".parse::<ReplayEvent>().is_err());
        assert!("next:2024-03-01".parse::<ReplayEvent>().is_err());
        assert!("hover:03/05/2024".parse::<ReplayEvent>().is_err());
        assert!(parse_month("2024-13").is_err());
        assert_eq!(parse_month("2024-02").unwrap(), date(2024, 2, 1));
    }

    #[test]
    fn test_disabled_click_is_skipped_unless_forced() {
        let mut engine = engine_with_disabled(&[date(2024, 3, 7)]);
        let event = ReplayEvent::Activate(date(2024, 3, 7));

        assert_eq!(
            apply(&mut engine, &event, false).unwrap(),
            StepOutcome::Skipped {
                date: date(2024, 3, 7),
                reason: "disabled".to_string()
            }
        );
        assert!(engine.selected_dates().is_empty());

        assert!(matches!(
            apply(&mut engine, &event, true).unwrap(),
            StepOutcome::Activate(_)
        ));
        assert!(engine.state().is_armed());
    }

    #[test]
    fn test_hidden_month_click_is_skipped() {
        let mut engine = range_engine_for_march();
        let outcome = step(&mut engine, ReplayEvent::Activate(date(2024, 5, 1)));
        assert!(matches!(outcome, StepOutcome::Skipped { .. }));

        let outcome = step(&mut engine, ReplayEvent::Hover(date(2024, 5, 1)));
        assert!(matches!(outcome, StepOutcome::Skipped { .. }));
    }

    #[test]
    fn test_hover_over_blocked_days_still_previews() {
        let mut engine = SelectionEngine::new(
            year_config().with_past(false),
            Vec::new(),
            true,
            date(2024, 3, 15),
        )
        .with_availability(Availability::new().with_disabled([date(2024, 3, 18)]));
        step(&mut engine, ReplayEvent::Activate(date(2024, 3, 16)));

        let disabled = step(&mut engine, ReplayEvent::Hover(date(2024, 3, 18)));
        let StepOutcome::Hover(result) = disabled else {
            panic!("expected hover, got {:?}", disabled);
        };
        assert!(result.changed);
        assert_eq!(result.hovered_dates.len(), 3);

        let past = step(&mut engine, ReplayEvent::Hover(date(2024, 3, 10)));
        assert!(matches!(
            past,
            StepOutcome::Hover(HoverChangeResult { changed: true, .. })
        ));

        // Clicking the disabled day is still refused
        let click = step(&mut engine, ReplayEvent::Activate(date(2024, 3, 18)));
        assert!(matches!(click, StepOutcome::Skipped { .. }));
        assert!(engine.state().is_armed());
    }

    #[test]
    fn test_outcome_serializes_with_event_tag() {
        let mut engine = range_engine_for_march();
        let event = ReplayEvent::Navigate(NavDirection::Next);
        let outcome = apply(&mut engine, &event, false).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["event"], "navigate");
        assert_eq!(json["current_month_index"], 3);
    }
}
