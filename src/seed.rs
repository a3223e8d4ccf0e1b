// src/seed.rs

//! Sample trivia corpus. Mirrors `migrations/0002_seed_trivia.sql`.

use crate::models::{category::Category, question::Question};

pub fn categories() -> Vec<Category> {
    [
        (1, "Science"),
        (2, "Art"),
        (3, "Geography"),
        (4, "History"),
        (5, "Entertainment"),
        (6, "Sports"),
    ]
    .into_iter()
    .map(|(id, kind)| Category::new(id, kind))
    .collect()
}

pub fn questions() -> Vec<Question> {
    const ROWS: [(i64, &str, &str, i64, i32); 18] = [
        (1, "What is the heaviest organ in the human body?", "The Liver", 1, 4),
        (2, "Who discovered penicillin?", "Alexander Fleming", 1, 3),
        (3, "Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
        (4, "What is the chemical symbol for gold?", "Au", 1, 2),
        (5, "How many bones are in the adult human body?", "206", 1, 3),
        (6, "Which planet is known as the Red Planet?", "Mars", 1, 1),
        (
            7,
            "Which Dutch graphic artist, initials M C, was a creator of optical illusions?",
            "Escher",
            2,
            1,
        ),
        (8, "La Giaconda is better known as what?", "Mona Lisa", 2, 3),
        (9, "How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
        (10, "What is the largest lake in Africa?", "Lake Victoria", 3, 2),
        (
            11,
            "In which royal palace would you find the Hall of Mirrors?",
            "The Palace of Versailles",
            3,
            3,
        ),
        (12, "The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
        (
            13,
            "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
            "Maya Angelou",
            4,
            2,
        ),
        (14, "Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
        (15, "Who invented Peanut Butter?", "George Washington Carver", 4, 2),
        (
            16,
            "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
            "Apollo 13",
            5,
            4,
        ),
        (
            17,
            "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
            "Tom Cruise",
            5,
            4,
        ),
        (
            18,
            "Which is the only team to play in every soccer World Cup tournament?",
            "Brazil",
            6,
            3,
        ),
    ];

    ROWS.into_iter()
        .map(|(id, question, answer, category, difficulty)| Question {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            difficulty,
        })
        .collect()
}
