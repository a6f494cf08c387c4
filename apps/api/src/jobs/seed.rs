use uuid::Uuid;

use crate::models::Job;

fn posting(
    title: &str,
    company: &str,
    location: &str,
    skills: &[&str],
    description: &str,
    apply_deadline: &str,
) -> Job {
    Job {
        job_id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        company: company.to_string(),
        description: description.to_string(),
        skills_required: skills.iter().map(|s| s.to_string()).collect(),
        location: location.to_string(),
        apply_deadline: apply_deadline.to_string(),
    }
}

/// Starter postings for an empty catalog. Each call mints fresh job ids.
pub fn sample_jobs() -> Vec<Job> {
    vec![
        posting(
            "Android Developer",
            "TechCorp",
            "San Francisco, CA",
            &["Kotlin", "Android", "Jetpack Compose", "Firebase"],
            "We are looking for an experienced Android Developer to join our mobile team.\n\
             Key responsibilities:\n\
             - Develop and maintain Android applications using Kotlin\n\
             - Implement UI/UX designs using Jetpack Compose\n\
             - Work with Firebase and other backend services\n\
             - Write clean, maintainable, and testable code",
            "2024-05-01",
        ),
        posting(
            "Full Stack Developer",
            "WebSolutions",
            "Remote",
            &["React", "Node.js", "TypeScript", "MongoDB"],
            "Join our team as a Full Stack Developer!\n\
             Requirements:\n\
             - Strong experience with React and Node.js\n\
             - Knowledge of TypeScript and MongoDB\n\
             - Experience with RESTful APIs\n\
             - Good understanding of web security",
            "2024-04-15",
        ),
        posting(
            "Mobile App Developer",
            "AppStudio",
            "New York, NY",
            &["Android", "iOS", "Flutter", "Firebase"],
            "Looking for a talented Mobile App Developer with cross-platform experience.\n\
             Required skills:\n\
             - Android and iOS development\n\
             - Experience with Flutter\n\
             - Firebase integration\n\
             - Strong problem-solving skills",
            "2024-04-30",
        ),
        posting(
            "Frontend Developer",
            "DesignCo",
            "Los Angeles, CA",
            &["React", "JavaScript", "CSS", "UI/UX"],
            "Join our creative team as a Frontend Developer!\n\
             What we're looking for:\n\
             - Strong React and JavaScript skills\n\
             - Eye for design and UI/UX principles\n\
             - Experience with modern CSS frameworks\n\
             - Passion for creating beautiful user interfaces",
            "2024-05-15",
        ),
        posting(
            "Backend Engineer",
            "CloudTech",
            "Seattle, WA",
            &["Java", "Spring Boot", "AWS", "MySQL"],
            "We're hiring a Backend Engineer to help scale our cloud services.\n\
             Requirements:\n\
             - Java and Spring Boot expertise\n\
             - AWS cloud services experience\n\
             - Database design and optimization\n\
             - High-performance system design",
            "2024-04-20",
        ),
    ]
}
