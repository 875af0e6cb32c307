//! Canned reply tables.

/// Exact commands (matched case-insensitively) and their fixed replies.
pub const PREDEFINED_COMMANDS: &[(&str, &str)] = &[
    (
        "/study",
        "I'd be happy to help you with your studies! What subject are you working on right now?",
    ),
    (
        "/plan",
        "Let's create a study plan together. What's your upcoming test or project about?",
    ),
    (
        "/motivate",
        "Remember that every expert was once a beginner. You're capable of amazing things when you put your mind to it! What specific challenge are you facing?",
    ),
    (
        "/help",
        "I'm here to help you with your studies! You can ask me about any subject, request study tips, create a study plan, or just chat.",
    ),
    (
        "/hello",
        "Hello there! I'm SKY Dost, your AI study friend. How can I assist you with your studies today?",
    ),
    (
        "/math",
        "I'd be happy to help with math! Are you working on algebra, calculus, or geometry?",
    ),
    (
        "/science",
        "Science is fascinating! What specific topic are you studying? Physics, Chemistry, or Biology?",
    ),
    (
        "/english",
        "I can help with English literature, grammar, or writing. What do you need help with?",
    ),
    (
        "/history",
        "History teaches us about our past. What period or event are you studying?",
    ),
    (
        "/physics",
        "Physics explains how our universe works! Are you studying mechanics, electricity, or thermodynamics?",
    ),
    (
        "/chemistry",
        "Chemistry is the study of matter and its transformations. What topic are you working on?",
    ),
    (
        "/biology",
        "Biology explores living organisms and their processes. What area are you studying?",
    ),
];

/// Substrings that mark a greeting.
pub const GREETING_TRIGGERS: &[&str] = &["hello", "hi", "hey", "greetings"];

pub const GREETING_REPLIES: &[&str] = &[
    "Hello! I'm SKY Dost, your study assistant. How can I help with your studies today?",
    "Hi there! I'm here to help you learn. What subject are you working on?",
    "Greetings! I'm SKY Dost, ready to assist with your educational journey.",
    "Welcome! I'm your study companion. What would you like to learn about today?",
    "Hey there! Ready to explore some knowledge together? What are you studying?",
];

/// Subject keywords in match order; the first keyword found wins.
pub const SUBJECT_REPLIES: &[(&str, &[&str])] = &[
    (
        "math",
        &[
            "Mathematics helps develop logical thinking! Are you working on algebra, geometry, calculus, or statistics?",
            "I'd be happy to help with math concepts. What specific problem or topic are you studying?",
            "Math can be challenging but rewarding! Let me know what you're working on.",
        ],
    ),
    (
        "science",
        &[
            "Science helps us understand the natural world! Are you studying physics, chemistry, biology, or earth science?",
            "I can help with various scientific concepts. What specific area are you exploring?",
            "Science is all about curiosity and discovery! What would you like to learn about?",
        ],
    ),
    (
        "physics",
        &[
            "Physics explains how our universe works! Are you studying mechanics, electricity, thermodynamics, or waves?",
            "I can help with physics concepts. What specific topic or problem are you working on?",
            "Physics can be fascinating! Let me know what you're studying.",
        ],
    ),
    (
        "chemistry",
        &[
            "Chemistry is the study of matter and its transformations! Are you working on elements, compounds, reactions, or equations?",
            "I can help with chemistry concepts. What specific area are you studying?",
            "Chemistry helps us understand the building blocks of our world! What topic interests you?",
        ],
    ),
    (
        "biology",
        &[
            "Biology explores living organisms and life processes! Are you studying cells, genetics, evolution, or ecology?",
            "I can help with biological concepts. What specific topic are you working on?",
            "Biology helps us understand life itself! What would you like to learn about?",
        ],
    ),
    (
        "english",
        &[
            "English language and literature open doors to communication and culture! Are you working on grammar, writing, reading, or analysis?",
            "I can help with English studies. What specific area do you need assistance with?",
            "English skills are essential for effective communication! What are you working on?",
        ],
    ),
    (
        "history",
        &[
            "History helps us understand our past and present! Are you studying ancient, medieval, modern, or world history?",
            "I can provide historical context and information. What specific period or event interests you?",
            "History lessons teach us about human experiences! What would you like to explore?",
        ],
    ),
    (
        "study",
        &[
            "Effective studying requires good habits! Try breaking material into smaller chunks and reviewing regularly.",
            "A good study technique is the Pomodoro method: 25 minutes of focused study followed by a 5-minute break.",
            "Remember to create a dedicated study space free from distractions for better concentration.",
        ],
    ),
    (
        "plan",
        &[
            "Let's create a study plan! First, identify what you need to study and how much time you have available.",
            "A good study plan includes specific goals, scheduled study times, and regular review sessions.",
            "When creating a study plan, be realistic about your time and include breaks to avoid burnout.",
        ],
    ),
    (
        "motivate",
        &[
            "Remember that every expert was once a beginner. Keep going and don't give up!",
            "Learning is a journey, not a destination. Celebrate your progress along the way!",
            "You're capable of amazing things when you put your mind to it. Believe in yourself!",
        ],
    ),
];

/// Generic study words that get a default reply.
pub const STUDY_KEYWORDS: &[&str] = &[
    "learn",
    "study",
    "teach",
    "education",
    "school",
    "college",
    "class",
];

pub const DEFAULT_REPLIES: &[&str] = &[
    "I'd be happy to help with your studies! What specific subject are you working on?",
    "Let's focus on your education. What would you like to learn about today?",
    "I'm here to assist with your learning journey. What topic are you studying?",
    "Education is the key to success. What would you like to explore today?",
    "I can help you with various subjects. What are you working on right now?",
    "Learning is a wonderful adventure! What subject would you like to discuss?",
    "I'm ready to help with your studies. What would you like to focus on today?",
];
