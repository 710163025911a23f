//! Static sample data the dashboard runs on. Dates are generated relative
//! to the process start so the "upcoming" and "history" windows stay
//! meaningful without a real data store behind them.

use chrono::{Duration, NaiveDate, Utc};

use crate::domain::{
    announcement::entities::{Announcement, Audience, CallToAction},
    common::entities::app_errors::CoreError,
    crypto::ports::HasherRepository,
    feedback::entities::SatisfactionFeedback,
    inventory::entities::InventoryItem,
    menu::entities::{DayMenu, MealItem, MealOption, MealType},
    selection::entities::{DailySelections, EmployeeMealHistory, MealSelectionRecord},
    user::entities::{AppUser, Role},
};

/// Demo credentials for the three seeded employees.
pub const DEV_EMPLOYEE_PASSWORD: &str = "plan-your-plate";
/// Demo credentials for the seeded canteen admin.
pub const DEV_ADMIN_PASSWORD: &str = "run-the-kitchen";

fn offset_date(days: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(days)
}

fn item(name: &str, calories: u32, allergens: &[&str], tags: &[&str], usage: f64) -> MealItem {
    MealItem {
        name: name.to_string(),
        calories,
        allergens: allergens.iter().map(|s| s.to_string()).collect(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        inventory_usage: usage,
    }
}

fn meal(meal_type: MealType, items: Vec<MealItem>, beverages: Option<&[&str]>) -> MealOption {
    MealOption {
        meal_type,
        items,
        beverage_pairings: beverages.map(|list| list.iter().map(|s| s.to_string()).collect()),
    }
}

pub fn menus() -> Vec<DayMenu> {
    vec![
        DayMenu {
            date: offset_date(1),
            guest_chef: Some("Chef Meera (Heritage Grains Kitchen)".to_string()),
            sustainability_note: Some(
                "Produce picked up this morning from partner farms; trimmings go to the compost program."
                    .to_string(),
            ),
            meals: vec![
                meal(
                    MealType::Breakfast,
                    vec![
                        item(
                            "Jowar Idli with Tomato Chutney",
                            260,
                            &[],
                            &["vegan", "gluten-free"],
                            140.0,
                        ),
                        item(
                            "Masala Oats Bowl",
                            220,
                            &["gluten"],
                            &["fibre-rich"],
                            90.0,
                        ),
                    ],
                    Some(&["Filter coffee", "Masala chai"]),
                ),
                meal(
                    MealType::Lunch,
                    vec![
                        item(
                            "Paneer Tikka Rice Bowl",
                            540,
                            &["dairy"],
                            &["high-protein", "chef special"],
                            210.0,
                        ),
                        item(
                            "Lemon Quinoa with Roasted Chickpeas",
                            430,
                            &[],
                            &["vegan"],
                            180.0,
                        ),
                    ],
                    Some(&["Buttermilk", "Ginger-lime cooler"]),
                ),
                meal(
                    MealType::Snacks,
                    vec![
                        item(
                            "Roasted Makhana Trail Mix",
                            160,
                            &["nuts"],
                            &["no-added-sugar"],
                            120.0,
                        ),
                        item(
                            "Vegetable Cutlet Sliders",
                            230,
                            &["gluten"],
                            &["popular"],
                            85.0,
                        ),
                    ],
                    Some(&["Cutting chai"]),
                ),
            ],
        },
        DayMenu {
            date: offset_date(2),
            guest_chef: None,
            sustainability_note: Some(
                "Batch sizes tuned against last week's opt-ins; surplus portions are donated same-day."
                    .to_string(),
            ),
            meals: vec![
                meal(
                    MealType::Breakfast,
                    vec![
                        item(
                            "Ragi Dosa with Peanut Chutney",
                            290,
                            &["peanut"],
                            &["vegan"],
                            150.0,
                        ),
                        item(
                            "Curd Rice Cups with Pomegranate",
                            240,
                            &["dairy"],
                            &["probiotic"],
                            120.0,
                        ),
                    ],
                    None,
                ),
                meal(
                    MealType::Lunch,
                    vec![
                        item(
                            "Malabar Fish Curry with Red Rice",
                            510,
                            &["fish"],
                            &["omega-3", "regional"],
                            230.0,
                        ),
                        item(
                            "Rajma Power Bowl",
                            450,
                            &[],
                            &["vegan", "high-protein"],
                            175.0,
                        ),
                    ],
                    None,
                ),
                meal(
                    MealType::Snacks,
                    vec![
                        item(
                            "Sweet Corn Bhel",
                            180,
                            &[],
                            &["street-food", "gluten-free"],
                            110.0,
                        ),
                        item(
                            "Dates and Sesame Laddoo",
                            170,
                            &["sesame"],
                            &["no-added-sugar"],
                            70.0,
                        ),
                    ],
                    None,
                ),
            ],
        },
        DayMenu {
            date: offset_date(3),
            guest_chef: Some("Chef Tomas (Zero-Waste Collective)".to_string()),
            sustainability_note: None,
            meals: vec![
                meal(
                    MealType::Breakfast,
                    vec![
                        item(
                            "Poha with Roasted Peanuts",
                            270,
                            &["peanut"],
                            &["vegan"],
                            120.0,
                        ),
                        item(
                            "Besan Chilla Wraps",
                            250,
                            &[],
                            &["high-protein", "gluten-free"],
                            160.0,
                        ),
                    ],
                    Some(&["Turmeric latte"]),
                ),
                meal(
                    MealType::Lunch,
                    vec![
                        item(
                            "Jackfruit Biryani",
                            520,
                            &[],
                            &["vegan", "chef special"],
                            190.0,
                        ),
                        item(
                            "Grilled Chicken and Millet Salad",
                            480,
                            &[],
                            &["high-protein"],
                            160.0,
                        ),
                    ],
                    None,
                ),
                meal(
                    MealType::Snacks,
                    vec![
                        item(
                            "Baked Banana Chips",
                            150,
                            &[],
                            &["low-oil"],
                            90.0,
                        ),
                        item(
                            "Paneer Tikka Skewers",
                            210,
                            &["dairy"],
                            &["popular"],
                            80.0,
                        ),
                    ],
                    None,
                ),
            ],
        },
        DayMenu {
            date: offset_date(4),
            guest_chef: None,
            sustainability_note: None,
            meals: vec![
                meal(
                    MealType::Breakfast,
                    vec![
                        item(
                            "Vegetable Upma",
                            280,
                            &[],
                            &["vegan", "fibre-rich"],
                            140.0,
                        ),
                        item(
                            "Greek Yogurt with Granola",
                            260,
                            &["dairy", "nuts"],
                            &["probiotic"],
                            100.0,
                        ),
                    ],
                    None,
                ),
                meal(
                    MealType::Lunch,
                    vec![
                        item(
                            "Kerala Veg Stew with Appam",
                            490,
                            &["coconut"],
                            &["regional"],
                            220.0,
                        ),
                        item(
                            "Tofu Stir-Fry with Brown Rice",
                            440,
                            &["soy"],
                            &["vegan", "high-protein"],
                            185.0,
                        ),
                    ],
                    None,
                ),
                meal(
                    MealType::Snacks,
                    vec![
                        item(
                            "Masala Roasted Chickpeas",
                            170,
                            &[],
                            &["high-protein"],
                            120.0,
                        ),
                        item(
                            "Fruit Chaat Cups",
                            140,
                            &[],
                            &["vegan", "dessert"],
                            85.0,
                        ),
                    ],
                    Some(&["Kokum cooler"]),
                ),
            ],
        },
    ]
}

pub fn inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: "inv-millets".to_string(),
            name: "Mixed Millets".to_string(),
            unit: "kg".to_string(),
            current: 44.0,
            par_level: 60.0,
            vendor: Some("Heritage Grains Co-op".to_string()),
        },
        InventoryItem {
            id: "inv-paneer".to_string(),
            name: "Fresh Paneer Blocks".to_string(),
            unit: "ct".to_string(),
            current: 75.0,
            par_level: 90.0,
            vendor: Some("Dairy Direct".to_string()),
        },
        InventoryItem {
            id: "inv-greens".to_string(),
            name: "Hydroponic Greens".to_string(),
            unit: "kg".to_string(),
            current: 32.0,
            par_level: 40.0,
            vendor: Some("CityLeaf Farms".to_string()),
        },
        InventoryItem {
            id: "inv-spices".to_string(),
            name: "House Spice Blend".to_string(),
            unit: "kg".to_string(),
            current: 18.0,
            par_level: 12.0,
            vendor: Some("Malabar Spice Traders".to_string()),
        },
    ]
}

fn day_records(
    date: NaiveDate,
    breakfast: bool,
    lunch: bool,
    snacks: bool,
) -> Vec<MealSelectionRecord> {
    vec![
        MealSelectionRecord {
            date,
            meal_type: MealType::Breakfast,
            opted_in: breakfast,
        },
        MealSelectionRecord {
            date,
            meal_type: MealType::Lunch,
            opted_in: lunch,
        },
        MealSelectionRecord {
            date,
            meal_type: MealType::Snacks,
            opted_in: snacks,
        },
    ]
}

pub fn employee_histories() -> Vec<EmployeeMealHistory> {
    vec![
        EmployeeMealHistory {
            user_id: "emp-anika".to_string(),
            records: [
                day_records(offset_date(-4), true, true, false),
                day_records(offset_date(-3), true, true, true),
                day_records(offset_date(-2), true, false, false),
                day_records(offset_date(-1), true, true, false),
            ]
            .concat(),
        },
        EmployeeMealHistory {
            user_id: "emp-jay".to_string(),
            records: [
                day_records(offset_date(-4), false, true, true),
                day_records(offset_date(-3), false, true, true),
                day_records(offset_date(-2), true, true, false),
                day_records(offset_date(-1), false, true, true),
            ]
            .concat(),
        },
        EmployeeMealHistory {
            user_id: "emp-leena".to_string(),
            records: [
                day_records(offset_date(-4), true, false, false),
                day_records(offset_date(-3), true, true, false),
                day_records(offset_date(-2), false, false, false),
                day_records(offset_date(-1), true, false, true),
            ]
            .concat(),
        },
    ]
}

pub fn aggregate_history() -> Vec<MealSelectionRecord> {
    [
        day_records(offset_date(-9), true, true, false),
        day_records(offset_date(-7), true, true, true),
        day_records(offset_date(-5), true, false, false),
        day_records(offset_date(-3), true, true, true),
        day_records(offset_date(-1), true, true, false),
    ]
    .concat()
}

pub fn feedback_entries() -> Vec<SatisfactionFeedback> {
    vec![
        SatisfactionFeedback {
            id: "fb-01".to_string(),
            user_id: "emp-anika".to_string(),
            rating: 5,
            occurred_on: offset_date(-1),
            highlight: "The jackfruit biryani was outstanding, and I love seeing the sourcing notes."
                .to_string(),
            improvement: Some("A low-sugar dessert option would be great.".to_string()),
        },
        SatisfactionFeedback {
            id: "fb-02".to_string(),
            user_id: "emp-jay".to_string(),
            rating: 4,
            occurred_on: offset_date(-2),
            highlight: "Locking meals in advance makes planning client lunches much easier."
                .to_string(),
            improvement: None,
        },
        SatisfactionFeedback {
            id: "fb-03".to_string(),
            user_id: "emp-leena".to_string(),
            rating: 3,
            occurred_on: offset_date(-3),
            highlight: "Breakfast variety has clearly improved.".to_string(),
            improvement: Some("Could snacks list their macros as well?".to_string()),
        },
    ]
}

pub fn announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: "ann-01".to_string(),
            created_at: offset_date(-1),
            title: "Heritage Grains Day tomorrow".to_string(),
            message: "Chef Meera is cooking with heirloom millets from partner co-ops. Opt in early so procurement can order exact quantities."
                .to_string(),
            audience: Audience::All,
            cta: None,
        },
        Announcement {
            id: "ann-02".to_string(),
            created_at: offset_date(-2),
            title: "Forecasting walkthrough for operations".to_string(),
            message: "A 30-minute session on reading the demand and waste panels in the new dashboard view."
                .to_string(),
            audience: Audience::Admin,
            cta: Some(CallToAction {
                label: "Reserve a seat".to_string(),
                href: "https://cal.example.com/canteen/forecasting".to_string(),
            }),
        },
        Announcement {
            id: "ann-03".to_string(),
            created_at: offset_date(-3),
            title: "Smart snacks pilot".to_string(),
            message: "Snack options now adapt to opt-in history. Tell us how the rotation feels."
                .to_string(),
            audience: Audience::Employee,
            cta: None,
        },
    ]
}

/// Build the seeded user registry. Password hashes are derived at startup
/// from the demo credentials; nothing here ships a precomputed hash.
pub async fn users<H: HasherRepository>(hasher: &H) -> Result<Vec<AppUser>, CoreError> {
    let employee_hash = hasher.hash_password(DEV_EMPLOYEE_PASSWORD).await?;
    let admin_hash = hasher.hash_password(DEV_ADMIN_PASSWORD).await?;

    Ok(vec![
        AppUser {
            id: "emp-anika".to_string(),
            name: "Anika Rao".to_string(),
            email: "anika.rao@karmic.solutions".to_string(),
            role: Role::Employee,
            department: "Product Design".to_string(),
            password_hash: employee_hash.clone(),
            avatar_fallback: "AR".to_string(),
            default_opt_in: DailySelections {
                breakfast: true,
                lunch: true,
                snacks: false,
            },
            dietary_notes: Some(
                "Allergic to peanuts, prefers high-protein lunch options.".to_string(),
            ),
        },
        AppUser {
            id: "emp-jay".to_string(),
            name: "Jay Mehta".to_string(),
            email: "jay.mehta@karmic.solutions".to_string(),
            role: Role::Employee,
            department: "Engineering".to_string(),
            password_hash: employee_hash.clone(),
            avatar_fallback: "JM".to_string(),
            default_opt_in: DailySelections {
                breakfast: false,
                lunch: true,
                snacks: true,
            },
            dietary_notes: Some("Vegetarian on Tuesdays and Thursdays.".to_string()),
        },
        AppUser {
            id: "emp-leena".to_string(),
            name: "Leena Dsouza".to_string(),
            email: "leena.dsouza@karmic.solutions".to_string(),
            role: Role::Employee,
            department: "Customer Success".to_string(),
            password_hash: employee_hash,
            avatar_fallback: "LD".to_string(),
            default_opt_in: DailySelections {
                breakfast: true,
                lunch: false,
                snacks: false,
            },
            dietary_notes: Some("Prefers low-carb breakfast alternatives.".to_string()),
        },
        AppUser {
            id: "admin-ria".to_string(),
            name: "Ria Kapoor".to_string(),
            email: "ria.kapoor@karmic.solutions".to_string(),
            role: Role::Admin,
            department: "Canteen Operations".to_string(),
            password_hash: admin_hash,
            avatar_fallback: "RK".to_string(),
            default_opt_in: DailySelections::default(),
            dietary_notes: None,
        },
    ])
}
