//! Meal tracker view model

use hackdesk_core::{MealStats, MealType, Search};

/// One row of the participants table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub team: String,
    /// Served flags in `MealType::ALL` order
    pub served: [bool; 4],
}

pub fn meal_rows(search: &Search<'_>) -> Vec<MealRow> {
    search
        .iter()
        .map(|p| MealRow {
            id: p.id.to_string(),
            name: p.name.clone(),
            email: p.email.clone(),
            team: p.team.clone(),
            served: MealType::ALL.map(|m| p.meals.get(m)),
        })
        .collect()
}

/// Table text for a set of rows
pub fn render_rows(rows: &[MealRow]) -> Vec<String> {
    if rows.is_empty() {
        return vec!["No participants found".to_string()];
    }

    let header = MealType::ALL
        .iter()
        .map(|m| format!("{:<10}", m.display_name()))
        .collect::<String>();
    let mut out = vec![format!(
        "{:<6}{:<20}{:<26}{:<14}{}",
        "ID", "Name", "Email", "Team", header
    )];

    for row in rows {
        let marks = row
            .served
            .iter()
            .map(|served| format!("{:<10}", if *served { "[x]" } else { "[ ]" }))
            .collect::<String>();
        out.push(format!(
            "{:<6}{:<20}{:<26}{:<14}{}",
            row.id, row.name, row.email, row.team, marks
        ));
    }
    out
}

/// Stats cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub cards: Vec<(MealType, usize, usize)>,
}

impl StatsView {
    pub fn new(stats: &MealStats) -> Self {
        Self {
            cards: MealType::ALL
                .iter()
                .map(|m| (*m, stats.served(*m), stats.remaining(*m)))
                .collect(),
        }
    }

    pub fn render(&self) -> Vec<String> {
        self.cards
            .iter()
            .map(|(meal, served, remaining)| {
                format!("{:<10} served {:>3}  remaining {:>3}", meal.display_name(), served, remaining)
            })
            .collect()
    }
}
