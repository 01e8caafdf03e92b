//! Canned client statements for offline role-play.
//!
//! A small fixed table keyed by `(theme, difficulty)`. Lookups that miss fall
//! back to the `stress` theme, and a missing difficulty within a theme falls
//! back to `beginner`, so every key resolves to some statement.

use crate::practice::settings::{Difficulty, Theme};

/// Theme used when the requested one has no entries
pub const FALLBACK_THEME: Theme = Theme::Stress;

/// Difficulty used when the requested one has no entry within a theme
pub const FALLBACK_DIFFICULTY: Difficulty = Difficulty::Beginner;

const STATEMENTS: &[(Theme, Difficulty, &str)] = &[
    (
        Theme::Nutrition,
        Difficulty::Beginner,
        "I've been trying to eat healthier, but I keep falling back into old habits. I know I should be eating more vegetables, but I just don't have the time to cook, and when I do try, it doesn't taste very good. I used to be really good at meal planning, but that was years ago. I'm just feeling overwhelmed by all the conflicting advice out there.",
    ),
    (
        Theme::Nutrition,
        Difficulty::Intermediate,
        "I'm struggling with emotional eating, especially in the evenings. I can do well during the day, but when I get home from work, I just want comfort food. I've tried different diets before, and I know what works for me when I'm in the right mindset. But right now, I feel like I'm stuck in this cycle.",
    ),
    (
        Theme::Nutrition,
        Difficulty::Advanced,
        "I'm dealing with some digestive issues that make healthy eating complicated. I've been working with a nutritionist, but I'm finding it hard to balance their recommendations with my busy schedule and family preferences. I have some strategies that work when I'm feeling well, but stress seems to trigger both my symptoms and my old eating patterns.",
    ),
    (
        Theme::Exercise,
        Difficulty::Beginner,
        "I want to get more active, but I'm not sure where to start. I used to enjoy walking, but I've been so busy with work that I haven't made time for it. I know exercise is important, but I feel like I need to do something intense to see results, and that's intimidating.",
    ),
    (
        Theme::Exercise,
        Difficulty::Intermediate,
        "I'm trying to build a consistent exercise routine, but I keep getting injured or burning out. I love the feeling when I'm active regularly, and I know I have more energy and better sleep. But I tend to go too hard and then have to stop completely.",
    ),
    (
        Theme::Exercise,
        Difficulty::Advanced,
        "I'm training for a specific goal, but I'm hitting plateaus and dealing with some performance anxiety. I have a good foundation of fitness habits, but I'm struggling to balance pushing myself with listening to my body. I know what works for me when I'm in the right headspace.",
    ),
    (
        Theme::Stress,
        Difficulty::Beginner,
        "I'm feeling really stressed lately, and I don't know how to manage it. Everything feels overwhelming, and I'm not sleeping well. I used to be better at handling stress, but lately, it's just getting to me.",
    ),
    (
        Theme::Stress,
        Difficulty::Intermediate,
        "I'm dealing with chronic stress from work, and it's affecting my relationships and health. I have some coping strategies that work sometimes, but I feel like I'm constantly playing catch-up. I know I need to set better boundaries.",
    ),
    (
        Theme::Stress,
        Difficulty::Advanced,
        "I'm experiencing burnout symptoms and need to rebuild my stress management toolkit. I have a good understanding of what triggers my stress and some effective strategies, but I'm struggling to implement them consistently in my current situation.",
    ),
];

/// Look up the statement for an exact key, without fallback.
pub fn exact_statement(theme: Theme, difficulty: Difficulty) -> Option<&'static str> {
    STATEMENTS
        .iter()
        .find(|(t, d, _)| *t == theme && *d == difficulty)
        .map(|(_, _, text)| *text)
}

/// Look up the statement for a key, falling back theme-first.
pub fn client_statement(theme: Theme, difficulty: Difficulty) -> &'static str {
    let theme = if has_theme(theme) { theme } else { FALLBACK_THEME };
    exact_statement(theme, difficulty)
        .or_else(|| exact_statement(theme, FALLBACK_DIFFICULTY))
        .unwrap_or(STATEMENTS[0].2)
}

fn has_theme(theme: Theme) -> bool {
    STATEMENTS.iter().any(|(t, _, _)| *t == theme)
}
