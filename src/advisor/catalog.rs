//! Reference Data
//!
//! Fixed quiz questions, course-to-career cards, colleges and the
//! stream-to-program table. Nothing here changes while the process runs.

use super::types::{College, Course, QuizQuestion, Stream, StreamScores};

/// Quiz questions with their per-stream weights
pub fn quiz_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new(
            1,
            "I enjoy solving maths and science problems",
            StreamScores { science: 2, ..Default::default() },
        ),
        QuizQuestion::new(
            2,
            "I like reading literature, history or writing stories",
            StreamScores { arts: 2, ..Default::default() },
        ),
        QuizQuestion::new(
            3,
            "I am curious about business, money and how markets work",
            StreamScores { commerce: 2, ..Default::default() },
        ),
        QuizQuestion::new(
            4,
            "I like working with numbers and data",
            StreamScores { science: 1, commerce: 1, ..Default::default() },
        ),
        QuizQuestion::new(
            5,
            "I enjoy organising events and working with people",
            StreamScores { commerce: 1, arts: 1, ..Default::default() },
        ),
    ]
}

/// Suggested programs for a stream, in display order
pub fn suggested_programs(stream: Stream) -> &'static [&'static str] {
    match stream {
        Stream::Science => &["B.Sc.", "B.Tech (via entrance)", "BCA"],
        Stream::Commerce => &["B.Com", "BBA", "BMS"],
        Stream::Arts => &["B.A.", "BFA", "BSW"],
    }
}

/// Course-to-career cards
pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: "bsc".to_string(),
            name: "B.Sc. (Bachelor of Science)".to_string(),
            careers: vec![
                "Research Assistant".to_string(),
                "Lab Technician".to_string(),
                "Data Analyst".to_string(),
                "Teacher".to_string(),
            ],
            description: "Three-year degree in physics, chemistry, biology or mathematics".to_string(),
        },
        Course {
            id: "btech".to_string(),
            name: "B.Tech (Bachelor of Technology)".to_string(),
            careers: vec![
                "Software Engineer".to_string(),
                "Mechanical Engineer".to_string(),
                "Civil Engineer".to_string(),
            ],
            description: "Four-year engineering degree, admission through entrance exams".to_string(),
        },
        Course {
            id: "bcom".to_string(),
            name: "B.Com (Bachelor of Commerce)".to_string(),
            careers: vec![
                "Accountant".to_string(),
                "Banking Officer".to_string(),
                "Tax Consultant".to_string(),
            ],
            description: "Accounting, finance, taxation and business law".to_string(),
        },
        Course {
            id: "bba".to_string(),
            name: "BBA (Bachelor of Business Administration)".to_string(),
            careers: vec![
                "Marketing Executive".to_string(),
                "HR Associate".to_string(),
                "Entrepreneur".to_string(),
            ],
            description: "Management fundamentals with a route into an MBA".to_string(),
        },
        Course {
            id: "ba".to_string(),
            name: "B.A. (Bachelor of Arts)".to_string(),
            careers: vec![
                "Civil Services".to_string(),
                "Journalist".to_string(),
                "Content Writer".to_string(),
                "Social Worker".to_string(),
            ],
            description: "Humanities and social sciences: history, economics, languages".to_string(),
        },
    ]
}

/// The fixed college list
pub fn colleges() -> Vec<College> {
    vec![
        College {
            id: 1,
            name: "Government Institute of Science".to_string(),
            district: "Nagpur".to_string(),
            programs: vec![
                "B.Sc. Physics".to_string(),
                "B.Sc. Chemistry".to_string(),
                "BCA".to_string(),
            ],
            hostel: true,
            internet: true,
            cutoff: "78%".to_string(),
        },
        College {
            id: 2,
            name: "Fergusson College".to_string(),
            district: "Pune".to_string(),
            programs: vec![
                "B.A. Economics".to_string(),
                "B.Sc. Mathematics".to_string(),
                "B.Com".to_string(),
            ],
            hostel: true,
            internet: true,
            cutoff: "85%".to_string(),
        },
        College {
            id: 3,
            name: "Sydenham College of Commerce".to_string(),
            district: "Mumbai".to_string(),
            programs: vec![
                "B.Com".to_string(),
                "BBA".to_string(),
                "BMS".to_string(),
            ],
            hostel: false,
            internet: true,
            cutoff: "82%".to_string(),
        },
        College {
            id: 4,
            name: "Government Arts College".to_string(),
            district: "Aurangabad".to_string(),
            programs: vec![
                "B.A. History".to_string(),
                "B.A. Marathi".to_string(),
                "BFA".to_string(),
            ],
            hostel: true,
            internet: false,
            cutoff: "60%".to_string(),
        },
        College {
            id: 5,
            name: "Walchand College of Engineering".to_string(),
            district: "Sangli".to_string(),
            programs: vec![
                "B.Tech Mechanical".to_string(),
                "B.Tech Computer Science".to_string(),
            ],
            hostel: true,
            internet: true,
            cutoff: "MHT-CET 92 percentile".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_question_ids_are_unique() {
        let ids: HashSet<u32> = quiz_questions().iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), quiz_questions().len());
    }

    #[test]
    fn test_college_ids_are_unique() {
        let ids: HashSet<u32> = colleges().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), colleges().len());
    }

    #[test]
    fn test_every_stream_has_programs() {
        for stream in Stream::ALL {
            assert!(!suggested_programs(stream).is_empty(), "{}", stream.as_str());
        }
    }
}
