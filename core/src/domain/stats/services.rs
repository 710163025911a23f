use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{
    announcement::ports::AnnouncementRepository,
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    crypto::ports::HasherRepository,
    feedback::{entities::SatisfactionFeedback, ports::FeedbackRepository},
    inventory::{entities::InventoryItem, ports::InventoryRepository},
    menu::{
        entities::{DayMenu, MealType},
        ports::MenuRepository,
        services::sort_menus_ascending,
    },
    selection::{
        entities::{EmployeeMealHistory, MealSelectionRecord},
        ports::{MealHistoryRepository, SelectionStorage},
    },
    stats::{
        ports::StatsService,
        value_objects::{
            FeedbackSnapshot, InventoryStatus, OptInOverview, TrendPoint, WasteForecastEntry,
        },
    },
    user::{entities::Role, ports::UserRepository},
};

/// Fixed sampling window of the per-employee overview, in records.
pub const OVERVIEW_WINDOW: usize = 9;
/// Fixed number of entries in the feedback snapshot.
pub const SNAPSHOT_WINDOW: usize = 3;
/// Number of upcoming menus the waste forecast covers.
pub const FORECAST_WINDOW: usize = 4;

// Forecast policy parameters. Changing any of these changes the published
// numbers; keep them in sync with the procurement playbook.
const USAGE_PER_OPT_IN: f64 = 3.5;
const WASTE_KG_PER_OPT_IN: f64 = 0.12;
const CARBON_KG_PER_WASTE_KG: f64 = 2.1;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Group records by day and compute each day's opt-in rate, ascending by
/// date.
pub fn build_trendline(records: &[MealSelectionRecord]) -> Vec<TrendPoint> {
    let mut grouped: BTreeMap<NaiveDate, (u32, u32)> = BTreeMap::new();

    for record in records {
        let (total, opted) = grouped.entry(record.date).or_insert((0, 0));
        *total += 1;
        if record.opted_in {
            *opted += 1;
        }
    }

    grouped
        .into_iter()
        .map(|(date, (total, opted))| TrendPoint {
            date,
            opt_in_rate: round1(f64::from(opted) / f64::from(total) * 100.0),
        })
        .collect()
}

/// Summarise the most recent `OVERVIEW_WINDOW` records of an employee's
/// history. A missing history yields a zeroed overview.
pub fn employee_opt_in_overview(history: Option<&EmployeeMealHistory>) -> OptInOverview {
    let Some(history) = history else {
        return OptInOverview {
            recorded_meals: 0,
            preferred_meals: Vec::new(),
            participation_rate: 0.0,
        };
    };

    let records = &history.records;
    let window = &records[records.len().saturating_sub(OVERVIEW_WINDOW)..];

    let opted = window.iter().filter(|record| record.opted_in).count();
    let participation_rate = opted as f64 / window.len().max(1) as f64;

    let counts: Vec<(MealType, usize)> = MealType::ALL
        .iter()
        .map(|meal_type| {
            let count = window
                .iter()
                .filter(|record| record.opted_in && record.meal_type == *meal_type)
                .count();
            (*meal_type, count)
        })
        .collect();

    // Stable sort keeps declaration order on ties.
    let mut ranked: Vec<(MealType, usize)> =
        counts.into_iter().filter(|(_, count)| *count > 0).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    OptInOverview {
        recorded_meals: window.len() as u32,
        preferred_meals: ranked.into_iter().map(|(meal_type, _)| meal_type).collect(),
        participation_rate,
    }
}

pub fn inventory_risk(items: &[InventoryItem]) -> Vec<InventoryStatus> {
    items
        .iter()
        .map(|item| InventoryStatus {
            item: item.clone(),
            risk: item.risk_band(),
            utilization: item.utilization(),
        })
        .collect()
}

/// Linear waste heuristics over the first `FORECAST_WINDOW` upcoming menus.
pub fn waste_forecast(menus: &[DayMenu]) -> Vec<WasteForecastEntry> {
    let mut upcoming = sort_menus_ascending(menus.to_vec());
    upcoming.truncate(FORECAST_WINDOW);

    upcoming
        .into_iter()
        .map(|menu| {
            let predicted_opt_ins = (menu.planned_inventory_usage() / USAGE_PER_OPT_IN).round() as i64;
            let waste_avoided_kg = round1(predicted_opt_ins as f64 * WASTE_KG_PER_OPT_IN);

            WasteForecastEntry {
                date: menu.date,
                predicted_opt_ins,
                waste_avoided_kg,
                carbon_offset: round1(waste_avoided_kg * CARBON_KG_PER_WASTE_KG),
            }
        })
        .collect()
}

/// Average of the most recent `SNAPSHOT_WINDOW` feedback entries.
pub fn feedback_snapshot(entries: &[SatisfactionFeedback]) -> FeedbackSnapshot {
    let mut recent = entries.to_vec();
    recent.sort_by(|a, b| b.occurred_on.cmp(&a.occurred_on));
    recent.truncate(SNAPSHOT_WINDOW);

    let total: u32 = recent.iter().map(|entry| u32::from(entry.rating)).sum();
    let average = round1(f64::from(total) / recent.len().max(1) as f64);

    FeedbackSnapshot {
        average,
        entries: recent,
    }
}

impl<U, M, MH, I, F, A, H, S> StatsService for Service<U, M, MH, I, F, A, H, S>
where
    U: UserRepository,
    M: MenuRepository,
    MH: MealHistoryRepository,
    I: InventoryRepository,
    F: FeedbackRepository,
    A: AnnouncementRepository,
    H: HasherRepository,
    S: SelectionStorage,
{
    async fn aggregate_trendline(&self, _identity: Identity) -> Result<Vec<TrendPoint>, CoreError> {
        let records = self.history_repository.aggregate().await?;

        Ok(build_trendline(&records))
    }

    async fn opt_in_overview(&self, identity: Identity) -> Result<OptInOverview, CoreError> {
        let history = self.history_repository.get_by_user(&identity.id).await?;

        Ok(employee_opt_in_overview(history.as_ref()))
    }

    async fn waste_forecast(&self, _identity: Identity) -> Result<Vec<WasteForecastEntry>, CoreError> {
        let menus = self.menu_repository.list().await?;

        Ok(waste_forecast(&menus))
    }

    async fn inventory_risk(&self, identity: Identity) -> Result<Vec<InventoryStatus>, CoreError> {
        ensure_policy(
            identity.role == Role::Admin,
            "insufficient permissions to view inventory analytics",
        )?;

        let items = self.inventory_repository.list().await?;

        Ok(inventory_risk(&items))
    }

    async fn feedback_snapshot(&self, identity: Identity) -> Result<FeedbackSnapshot, CoreError> {
        ensure_policy(
            identity.role == Role::Admin,
            "insufficient permissions to view feedback analytics",
        )?;

        let entries = self.feedback_repository.list().await?;

        Ok(feedback_snapshot(&entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        inventory::entities::RiskBand,
        menu::entities::{MealItem, MealOption},
    };

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn record(day: &str, meal_type: MealType, opted_in: bool) -> MealSelectionRecord {
        MealSelectionRecord {
            date: date(day),
            meal_type,
            opted_in,
        }
    }

    fn menu_with_usage(day: &str, usage: &[f64]) -> DayMenu {
        DayMenu {
            date: date(day),
            meals: vec![MealOption {
                meal_type: MealType::Lunch,
                items: usage
                    .iter()
                    .map(|inventory_usage| MealItem {
                        name: "dish".to_string(),
                        calories: 400,
                        allergens: vec![],
                        tags: vec![],
                        inventory_usage: *inventory_usage,
                    })
                    .collect(),
                beverage_pairings: None,
            }],
            guest_chef: None,
            sustainability_note: None,
        }
    }

    fn feedback(id: &str, rating: u8, occurred_on: &str) -> SatisfactionFeedback {
        SatisfactionFeedback {
            id: id.to_string(),
            user_id: "emp-anika".to_string(),
            rating,
            occurred_on: date(occurred_on),
            highlight: "highlight".to_string(),
            improvement: None,
        }
    }

    #[test]
    fn test_trendline_groups_by_day_and_sorts_ascending() {
        let records = vec![
            record("2026-08-02", MealType::Breakfast, true),
            record("2026-08-01", MealType::Breakfast, true),
            record("2026-08-01", MealType::Lunch, false),
        ];

        let trendline = build_trendline(&records);

        assert_eq!(trendline.len(), 2);
        assert_eq!(trendline[0].date, date("2026-08-01"));
        assert_eq!(trendline[0].opt_in_rate, 50.0);
        assert_eq!(trendline[1].date, date("2026-08-02"));
        assert_eq!(trendline[1].opt_in_rate, 100.0);
    }

    #[test]
    fn test_trendline_empty_input() {
        assert!(build_trendline(&[]).is_empty());
    }

    #[test]
    fn test_overview_missing_history_is_zeroed() {
        let overview = employee_opt_in_overview(None);

        assert_eq!(overview.recorded_meals, 0);
        assert!(overview.preferred_meals.is_empty());
        assert_eq!(overview.participation_rate, 0.0);
    }

    #[test]
    fn test_overview_samples_only_the_last_nine_records() {
        let mut records = vec![
            record("2026-07-28", MealType::Breakfast, true),
            record("2026-07-28", MealType::Lunch, true),
            record("2026-07-28", MealType::Snacks, true),
        ];
        for day in ["2026-07-29", "2026-07-30", "2026-07-31"] {
            records.push(record(day, MealType::Breakfast, false));
            records.push(record(day, MealType::Lunch, false));
            records.push(record(day, MealType::Snacks, false));
        }

        let history = EmployeeMealHistory {
            user_id: "emp-anika".to_string(),
            records,
        };
        let overview = employee_opt_in_overview(Some(&history));

        // the three opt-ins fall outside the window
        assert_eq!(overview.recorded_meals, 9);
        assert!(overview.preferred_meals.is_empty());
        assert_eq!(overview.participation_rate, 0.0);
    }

    #[test]
    fn test_overview_ranks_meals_with_declaration_order_ties() {
        let records = vec![
            record("2026-08-01", MealType::Snacks, true),
            record("2026-08-01", MealType::Lunch, true),
            record("2026-08-02", MealType::Lunch, true),
            record("2026-08-02", MealType::Breakfast, true),
            record("2026-08-03", MealType::Breakfast, true),
            record("2026-08-03", MealType::Snacks, false),
        ];

        let history = EmployeeMealHistory {
            user_id: "emp-jay".to_string(),
            records,
        };
        let overview = employee_opt_in_overview(Some(&history));

        // breakfast and lunch tie at 2; breakfast wins by declaration order
        assert_eq!(
            overview.preferred_meals,
            vec![MealType::Breakfast, MealType::Lunch, MealType::Snacks]
        );
        assert_eq!(overview.recorded_meals, 6);
        assert_eq!(overview.participation_rate, 5.0 / 6.0);
    }

    #[test]
    fn test_inventory_risk_boundaries() {
        let at_three_quarters = InventoryItem {
            id: "inv-a".to_string(),
            name: "Mixed Millets".to_string(),
            unit: "kg".to_string(),
            current: 45.0,
            par_level: 60.0,
            vendor: None,
        };
        let at_par = InventoryItem {
            current: 60.0,
            ..at_three_quarters.clone()
        };
        let below_three_quarters = InventoryItem {
            current: 44.9,
            ..at_three_quarters.clone()
        };

        // the high threshold is strict, so exactly 75% of par is medium
        assert_eq!(at_three_quarters.risk_band(), RiskBand::Medium);
        assert_eq!(at_par.risk_band(), RiskBand::Low);
        assert_eq!(below_three_quarters.risk_band(), RiskBand::High);
    }

    #[test]
    fn test_inventory_utilization_guards_zero_par_level() {
        let item = InventoryItem {
            id: "inv-b".to_string(),
            name: "Signature Spice Blend".to_string(),
            unit: "kg".to_string(),
            current: 18.0,
            par_level: 0.0,
            vendor: None,
        };

        assert_eq!(item.utilization(), 0);

        let statuses = inventory_risk(&[item]);
        assert_eq!(statuses[0].utilization, 0);
    }

    #[test]
    fn test_waste_forecast_formula() {
        let menus = vec![menu_with_usage("2026-08-10", &[400.0, 300.0])];

        let forecast = waste_forecast(&menus);

        assert_eq!(forecast.len(), 1);
        assert_eq!(forecast[0].predicted_opt_ins, 200);
        assert_eq!(forecast[0].waste_avoided_kg, 24.0);
        assert_eq!(forecast[0].carbon_offset, 50.4);
    }

    #[test]
    fn test_waste_forecast_covers_first_four_days_sorted() {
        let menus = vec![
            menu_with_usage("2026-08-14", &[100.0]),
            menu_with_usage("2026-08-10", &[100.0]),
            menu_with_usage("2026-08-12", &[100.0]),
            menu_with_usage("2026-08-11", &[100.0]),
            menu_with_usage("2026-08-13", &[100.0]),
        ];

        let forecast = waste_forecast(&menus);

        let dates: Vec<String> = forecast.iter().map(|entry| entry.date.to_string()).collect();
        assert_eq!(
            dates,
            vec!["2026-08-10", "2026-08-11", "2026-08-12", "2026-08-13"]
        );
    }

    #[test]
    fn test_feedback_snapshot_averages_most_recent_three() {
        let entries = vec![
            feedback("fb-01", 5, "2026-08-06"),
            feedback("fb-02", 4, "2026-08-05"),
            feedback("fb-03", 3, "2026-08-04"),
            feedback("fb-04", 1, "2026-08-01"),
        ];

        let snapshot = feedback_snapshot(&entries);

        assert_eq!(snapshot.entries.len(), 3);
        assert_eq!(snapshot.average, 4.0);
        assert_eq!(snapshot.entries[0].id, "fb-01");
    }

    #[test]
    fn test_feedback_snapshot_with_fewer_entries() {
        let entries = vec![
            feedback("fb-01", 4, "2026-08-06"),
            feedback("fb-02", 3, "2026-08-05"),
        ];

        let snapshot = feedback_snapshot(&entries);

        assert_eq!(snapshot.entries.len(), 2);
        assert_eq!(snapshot.average, 3.5);
    }

    #[test]
    fn test_feedback_snapshot_empty() {
        let snapshot = feedback_snapshot(&[]);

        assert!(snapshot.entries.is_empty());
        assert_eq!(snapshot.average, 0.0);
    }
}
