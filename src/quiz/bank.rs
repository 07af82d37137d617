//! Static question content, grouped by level
//!
//! Eight questions per tier. Mixed rounds play every tier in order.

use once_cell::sync::Lazy;

use super::question::{Level, QuizQuestion};

static LEVEL1: [QuizQuestion; 8] = [
    QuizQuestion::new(
        1,
        Level::Easy,
        "What is the aircraft that carries passengers over long distances?",
        [
            "Biplane",
            "Fighter",
            "Passenger aircraft",
            "Aerobatic aircraft",
        ],
        2,
        [
            "Biplane.png",
            "Fighter.png",
            "Passenger_aircraft.png",
            "Aerobatic_aircraft.png",
        ],
    ),
    QuizQuestion::new(
        2,
        Level::Easy,
        "Which aircraft has two wings placed one above the other?",
        [
            "Biplane",
            "Passenger aircraft",
            "Civilian observation aircraft",
            "Modern strategic bomber",
        ],
        0,
        [
            "Biplane.png",
            "Passenger_aircraft.png",
            "Civilian_observation_aircraft.png",
            "Modern_strategic_bomber.png",
        ],
    ),
    QuizQuestion::new(
        3,
        Level::Easy,
        "Which aircraft is designed for air combat?",
        [
            "Search and rescue aircraft",
            "Fighter",
            "Seaplane",
            "Anti-submarine aircraft",
        ],
        1,
        [
            "Search_and_rescue_aircraft.png",
            "Fighter.png",
            "Seaplane.png",
            "Anti_submarine_aircraft.png",
        ],
    ),
    QuizQuestion::new(
        4,
        Level::Easy,
        "Which aircraft can take off and land on water?",
        [
            "Seaplane",
            "Piston trainer aircraft",
            "Fighter",
            "Biplane",
        ],
        0,
        [
            "Seaplane.png",
            "Piston_trainer_aircraft.png",
            "Fighter.png",
            "Biplane.png",
        ],
    ),
    QuizQuestion::new(
        5,
        Level::Easy,
        "Which aircraft is intended for training new pilots?",
        [
            "Anti-submarine aircraft",
            "Piston trainer aircraft",
            "Civilian observation aircraft",
            "Aerobatic aircraft",
        ],
        1,
        [
            "Anti_submarine_aircraft.png",
            "Piston_trainer_aircraft.png",
            "Civilian_observation_aircraft.png",
            "Aerobatic_aircraft.png",
        ],
    ),
    QuizQuestion::new(
        6,
        Level::Easy,
        "Which aircraft is used for searching and conducting rescue operations?",
        [
            "Search and rescue aircraft",
            "Passenger aircraft",
            "Modern strategic bomber",
            "Biplane",
        ],
        0,
        [
            "Search_and_rescue_aircraft.png",
            "Passenger_aircraft.png",
            "Modern_strategic_bomber.png",
            "Biplane.png",
        ],
    ),
    QuizQuestion::new(
        7,
        Level::Easy,
        "Which aircraft is used for civilian observation, for example, weather monitoring?",
        [
            "Civilian observation aircraft",
            "Fighter",
            "Anti-submarine aircraft",
            "Seaplane",
        ],
        0,
        [
            "Civilian_observation_aircraft.png",
            "Fighter.png",
            "Anti_submarine_aircraft.png",
            "Seaplane.png",
        ],
    ),
    QuizQuestion::new(
        8,
        Level::Easy,
        "Which aircraft is used to perform aerobatic maneuvers?",
        [
            "Aerobatic aircraft",
            "Anti-submarine aircraft",
            "Search and rescue aircraft",
            "Passenger aircraft",
        ],
        0,
        [
            "Aerobatic_aircraft.png",
            "Anti_submarine_aircraft.png",
            "Search_and_rescue_aircraft.png",
            "Passenger_aircraft.png",
        ],
    ),
];

static LEVEL2: [QuizQuestion; 8] = [
    QuizQuestion::new(
        9,
        Level::Medium,
        "Which aircraft is designed to deliver nuclear and conventional strikes over long distances?",
        [
            "Modern strategic bomber",
            "Piston trainer aircraft",
            "Biplane",
            "Civilian observation aircraft",
        ],
        0,
        [
            "Modern_strategic_bomber.png",
            "Piston_trainer_aircraft.png",
            "Biplane.png",
            "Civilian_observation_aircraft.png",
        ],
    ),
    QuizQuestion::new(
        10,
        Level::Medium,
        "Which aircraft patrols the oceans and hunts submarines?",
        [
            "Anti-submarine aircraft",
            "Passenger aircraft",
            "Aerobatic aircraft",
            "Fighter",
        ],
        0,
        [
            "Anti_submarine_aircraft.png",
            "Passenger_aircraft.png",
            "Aerobatic_aircraft.png",
            "Fighter.png",
        ],
    ),
    QuizQuestion::new(
        11,
        Level::Medium,
        "Which aircraft was most commonly used during World War I?",
        [
            "Biplane",
            "Modern strategic bomber",
            "Fighter",
            "Piston trainer aircraft",
        ],
        0,
        [
            "Biplane.png",
            "Modern_strategic_bomber.png",
            "Fighter.png",
            "Piston_trainer_aircraft.png",
        ],
    ),
    QuizQuestion::new(
        12,
        Level::Medium,
        "What type of aircraft is typically used for cargo transport?",
        [
            "Fighter",
            "Passenger aircraft",
            "Cargo aircraft",
            "Aerobatic aircraft",
        ],
        2,
        [
            "Fighter.png",
            "Passenger_aircraft.png",
            "Passenger_aircraft.png",
            "Aerobatic_aircraft.png",
        ],
    ),
    QuizQuestion::new(
        13,
        Level::Medium,
        "Which aircraft is designed for high-speed reconnaissance missions?",
        [
            "Biplane",
            "Reconnaissance aircraft",
            "Seaplane",
            "Piston trainer aircraft",
        ],
        1,
        [
            "Biplane.png",
            "Civilian_observation_aircraft.png",
            "Seaplane.png",
            "Piston_trainer_aircraft.png",
        ],
    ),
    QuizQuestion::new(
        14,
        Level::Medium,
        "What aircraft type is known for its ability to hover in place?",
        [
            "Helicopter",
            "Fighter",
            "Passenger aircraft",
            "Biplane",
        ],
        0,
        [
            "Search_and_rescue_aircraft.png",
            "Fighter.png",
            "Passenger_aircraft.png",
            "Biplane.png",
        ],
    ),
    QuizQuestion::new(
        15,
        Level::Medium,
        "Which aircraft is primarily used for agricultural purposes like crop dusting?",
        [
            "Agricultural aircraft",
            "Fighter",
            "Passenger aircraft",
            "Modern strategic bomber",
        ],
        0,
        [
            "Piston_trainer_aircraft.png",
            "Fighter.png",
            "Passenger_aircraft.png",
            "Modern_strategic_bomber.png",
        ],
    ),
    QuizQuestion::new(
        16,
        Level::Medium,
        "What type of aircraft is designed to operate from aircraft carriers?",
        [
            "Carrier-based aircraft",
            "Seaplane",
            "Passenger aircraft",
            "Biplane",
        ],
        0,
        [
            "Fighter.png",
            "Seaplane.png",
            "Passenger_aircraft.png",
            "Biplane.png",
        ],
    ),
];

static LEVEL3: [QuizQuestion; 8] = [
    QuizQuestion::new(
        17,
        Level::Hard,
        "Which aircraft type is known for its stealth capabilities and radar evasion?",
        [
            "Stealth aircraft",
            "Biplane",
            "Passenger aircraft",
            "Seaplane",
        ],
        0,
        [
            "Modern_strategic_bomber.png",
            "Biplane.png",
            "Passenger_aircraft.png",
            "Seaplane.png",
        ],
    ),
    QuizQuestion::new(
        18,
        Level::Hard,
        "What aircraft is designed to refuel other aircraft in mid-flight?",
        [
            "Tanker aircraft",
            "Fighter",
            "Passenger aircraft",
            "Aerobatic aircraft",
        ],
        0,
        [
            "Passenger_aircraft.png",
            "Fighter.png",
            "Passenger_aircraft.png",
            "Aerobatic_aircraft.png",
        ],
    ),
    QuizQuestion::new(
        19,
        Level::Hard,
        "Which aircraft type is specifically designed for electronic warfare?",
        [
            "Electronic warfare aircraft",
            "Fighter",
            "Biplane",
            "Seaplane",
        ],
        0,
        [
            "Modern_strategic_bomber.png",
            "Fighter.png",
            "Biplane.png",
            "Seaplane.png",
        ],
    ),
    QuizQuestion::new(
        20,
        Level::Hard,
        "What aircraft is designed to carry and launch satellites into space?",
        [
            "Space launch aircraft",
            "Passenger aircraft",
            "Fighter",
            "Biplane",
        ],
        0,
        [
            "Modern_strategic_bomber.png",
            "Passenger_aircraft.png",
            "Fighter.png",
            "Biplane.png",
        ],
    ),
    QuizQuestion::new(
        21,
        Level::Hard,
        "Which aircraft type is used for early warning and control systems?",
        [
            "AWACS aircraft",
            "Fighter",
            "Passenger aircraft",
            "Aerobatic aircraft",
        ],
        0,
        [
            "Passenger_aircraft.png",
            "Fighter.png",
            "Passenger_aircraft.png",
            "Aerobatic_aircraft.png",
        ],
    ),
    QuizQuestion::new(
        22,
        Level::Hard,
        "What aircraft is designed for high-altitude reconnaissance and surveillance?",
        [
            "High-altitude reconnaissance aircraft",
            "Fighter",
            "Biplane",
            "Seaplane",
        ],
        0,
        [
            "Civilian_observation_aircraft.png",
            "Fighter.png",
            "Biplane.png",
            "Seaplane.png",
        ],
    ),
    QuizQuestion::new(
        23,
        Level::Hard,
        "Which aircraft type is specifically designed for maritime patrol and anti-submarine warfare?",
        [
            "Maritime patrol aircraft",
            "Fighter",
            "Passenger aircraft",
            "Aerobatic aircraft",
        ],
        0,
        [
            "Anti_submarine_aircraft.png",
            "Fighter.png",
            "Passenger_aircraft.png",
            "Aerobatic_aircraft.png",
        ],
    ),
    QuizQuestion::new(
        24,
        Level::Hard,
        "What aircraft is designed for close air support and ground attack missions?",
        [
            "Ground attack aircraft",
            "Passenger aircraft",
            "Biplane",
            "Seaplane",
        ],
        0,
        [
            "Fighter.png",
            "Passenger_aircraft.png",
            "Biplane.png",
            "Seaplane.png",
        ],
    ),
];

static ALL_QUESTIONS: Lazy<Vec<QuizQuestion>> = Lazy::new(|| {
    LEVEL1
        .iter()
        .chain(LEVEL2.iter())
        .chain(LEVEL3.iter())
        .copied()
        .collect()
});

/// Questions for a level, in fixed order. `Level::Mixed` returns every question.
pub fn questions_by_level(level: Level) -> &'static [QuizQuestion] {
    match level {
        Level::Easy => &LEVEL1,
        Level::Medium => &LEVEL2,
        Level::Hard => &LEVEL3,
        Level::Mixed => ALL_QUESTIONS.as_slice(),
    }
}

pub fn all_questions() -> &'static [QuizQuestion] {
    ALL_QUESTIONS.as_slice()
}

pub fn total_questions_by_level(level: Level) -> usize {
    questions_by_level(level).len()
}

/// Highest obtainable points for a full round at this level
pub fn max_points_by_level(level: Level) -> u32 {
    questions_by_level(level).iter().map(|q| q.points).sum()
}

pub fn question_by_id(id: u32) -> Option<&'static QuizQuestion> {
    all_questions().iter().find(|q| q.id == id)
}
