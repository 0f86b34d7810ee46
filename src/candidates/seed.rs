//! Built-in sample candidates used to initialize empty or unreadable storage.

use super::domain::{Candidate, CandidateId, Experience, Gender};

fn candidate(
    name: &str,
    phone: &str,
    email: &str,
    gender: Gender,
    experience: Experience,
    qualification: &str,
    skills: &[&str],
) -> Candidate {
    Candidate {
        id: CandidateId::generate(),
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        gender,
        experience,
        qualification: Some(qualification.to_string()),
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
    }
}

/// The fixed sample set. Identifiers are allocated at call time, so two
/// invocations produce equal field values under distinct ids.
pub fn sample_candidates() -> Vec<Candidate> {
    vec![
        candidate(
            "John Doe",
            "+1 (555) 123-4567",
            "john.doe@example.com",
            Gender::Male,
            Experience::ThreeYears,
            "Bachelor of Arts (BA)",
            &["JavaScript", "React", "Node.js"],
        ),
        candidate(
            "Jane Smith",
            "+1 (555) 987-6543",
            "jane.smith@example.com",
            Gender::Female,
            Experience::FiveYears,
            "Master of Computer Science (MCS)",
            &["Python", "Django", "SQL"],
        ),
        candidate(
            "Michael Johnson",
            "+1 (555) 456-7890",
            "michael.j@example.com",
            Gender::Male,
            Experience::TwoYears,
            "Bachelor of Science (BS)",
            &["Java", "Spring", "Hibernate"],
        ),
        candidate(
            "Emily Wilson",
            "+1 (555) 789-0123",
            "emily.w@example.com",
            Gender::Female,
            Experience::FourYears,
            "Master of Business Administration (MBA)",
            &["TypeScript", "Angular", "MongoDB"],
        ),
        candidate(
            "Alex Rivera",
            "+1 (555) 234-5678",
            "alex.r@example.com",
            Gender::Other,
            Experience::SixYears,
            "PhD in Computer Science",
            &["C#", ".NET", "SQL", "Azure"],
        ),
        candidate(
            "Samantha Lee",
            "+1 (555) 345-6789",
            "samantha.l@example.com",
            Gender::Female,
            Experience::ThreeYears,
            "Bachelor of Engineering (BE)",
            &["React", "Redux", "JavaScript", "HTML", "CSS"],
        ),
        candidate(
            "David Kim",
            "+1 (555) 876-5432",
            "david.k@example.com",
            Gender::Male,
            Experience::SevenYears,
            "Master of Science (MS)",
            &["Python", "Machine Learning", "TensorFlow"],
        ),
        candidate(
            "Olivia Martinez",
            "+1 (555) 567-8901",
            "olivia.m@example.com",
            Gender::Female,
            Experience::TwoYears,
            "Bachelor of Technology (BTech)",
            &["Vue.js", "JavaScript", "CSS"],
        ),
        candidate(
            "Ethan Brown",
            "+1 (555) 678-9012",
            "ethan.b@example.com",
            Gender::Male,
            Experience::FourYears,
            "Bachelor of Computer Applications (BCA)",
            &["PHP", "Laravel", "MySQL"],
        ),
        candidate(
            "Sophia Chen",
            "+1 (555) 789-0123",
            "sophia.c@example.com",
            Gender::Female,
            Experience::FiveYears,
            "Master of Computer Applications (MCA)",
            &["AWS", "DevOps", "Docker", "Kubernetes"],
        ),
        candidate(
            "Daniel Wilson",
            "+1 (555) 890-1234",
            "daniel.w@example.com",
            Gender::Male,
            Experience::EightYears,
            "PhD in Data Science",
            &["Data Science", "R", "Python", "Statistics"],
        ),
        candidate(
            "Ava Rodriguez",
            "+1 (555) 901-2345",
            "ava.r@example.com",
            Gender::Female,
            Experience::ThreeYears,
            "Bachelor of Science (BS)",
            &["JavaScript", "React Native", "Mobile Development"],
        ),
    ]
}
