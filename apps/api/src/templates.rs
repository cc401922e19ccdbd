#![allow(dead_code)]

//! Built-in starter documents.
//!
//! `fresher_resume` doubles as the first-run substitution template the
//! `EditSession` persists when a user's draft comes back entirely empty.

use crate::models::resume::{
    CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeData,
    SkillGroup,
};

fn skill_group(category: &str, items: &[&str]) -> SkillGroup {
    SkillGroup {
        category: category.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

/// Entry-level starter content.
pub fn fresher_resume() -> ResumeData {
    ResumeData {
        personal_info: PersonalInfo {
            full_name: "Jordan Lee".to_string(),
            email: "jordan.lee@example.com".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            linkedin: "linkedin.com/in/jordanlee".to_string(),
            portfolio: "jordanlee.dev".to_string(),
            address: "New York, NY".to_string(),
            summary: "Motivated Computer Science graduate with a strong foundation in software \
                      development principles. Passionate about building user-centric web \
                      applications and eager to launch a career as a Full Stack Developer. Quick \
                      learner with excellent problem-solving skills and a collaborative mindset."
                .to_string(),
        },
        experience: Vec::new(),
        education: vec![EducationEntry {
            id: "1".to_string(),
            degree: "Bachelor of Science in Computer Science".to_string(),
            school: "State University of New York".to_string(),
            location: "Albany, NY".to_string(),
            start_date: "2019-09".to_string(),
            end_date: "2023-05".to_string(),
        }],
        skills: vec![
            skill_group(
                "Languages",
                &["JavaScript (ES6+)", "Python", "Java", "HTML5", "CSS3"],
            ),
            skill_group("Frameworks", &["React", "Node.js", "Express"]),
            skill_group("Tools", &["Git", "VS Code", "MongoDB"]),
        ],
        projects: vec![
            ProjectEntry {
                id: "1".to_string(),
                title: "Task Management App".to_string(),
                link: "github.com/jordanlee/task-manager".to_string(),
                description: "Developed a full-stack task management application using MERN \
                              stack. Implemented user authentication, CRUD operations, and \
                              real-time updates."
                    .to_string(),
            },
            ProjectEntry {
                id: "2".to_string(),
                title: "Weather Dashboard".to_string(),
                link: "github.com/jordanlee/weather-app".to_string(),
                description: "Built a responsive weather dashboard that fetches real-time data \
                              from OpenWeatherMap API. Features include location search and \
                              5-day forecast."
                    .to_string(),
            },
        ],
        certifications: vec![CertificationEntry {
            id: "1".to_string(),
            name: "Full Stack Web Development Bootcamp".to_string(),
            date: "2023-08".to_string(),
        }],
    }
}

/// Experienced-profile starter content.
pub fn senior_resume() -> ResumeData {
    ResumeData {
        personal_info: PersonalInfo {
            full_name: "Sarah Jenkins".to_string(),
            email: "sarah.jenkins@example.com".to_string(),
            phone: "+1 (555) 234-5678".to_string(),
            linkedin: "linkedin.com/in/sarahjenkins".to_string(),
            portfolio: "sarahjenkins.io".to_string(),
            address: "Seattle, WA".to_string(),
            summary: "Results-driven Senior Software Engineer with 8+ years of experience in \
                      designing and architecting scalable distributed systems. Expert in \
                      cloud-native technologies, microservices, and DevOps practices. Proven \
                      track record of leading cross-functional teams and mentoring junior \
                      developers."
                .to_string(),
        },
        experience: vec![
            ExperienceEntry {
                id: "1".to_string(),
                job_title: "Staff Software Engineer".to_string(),
                company: "CloudScale Systems".to_string(),
                location: "Seattle, WA".to_string(),
                start_date: "2019-06".to_string(),
                end_date: "Present".to_string(),
                current: true,
                description: "Architected and led the migration of core platform services to \
                              AWS, resulting in 99.99% availability and 30% cost reduction. \
                              Mentored a team of 5 engineers and established coding standards \
                              and best practices."
                    .to_string(),
            },
            ExperienceEntry {
                id: "2".to_string(),
                job_title: "Senior Backend Developer".to_string(),
                company: "DataFlow Inc.".to_string(),
                location: "Austin, TX".to_string(),
                start_date: "2016-03".to_string(),
                end_date: "2019-05".to_string(),
                current: false,
                description: "Designed and implemented high-performance data processing \
                              pipelines using Apache Kafka and Spark. Optimized database \
                              queries, reducing latency by 60%."
                    .to_string(),
            },
            ExperienceEntry {
                id: "3".to_string(),
                job_title: "Software Engineer".to_string(),
                company: "WebSolutions LLC".to_string(),
                location: "Austin, TX".to_string(),
                start_date: "2014-07".to_string(),
                end_date: "2016-02".to_string(),
                current: false,
                description: "Developed and maintained RESTful APIs for a high-traffic \
                              e-commerce platform. Collaborated with product managers to define \
                              requirements and deliver features on time."
                    .to_string(),
            },
        ],
        education: vec![EducationEntry {
            id: "1".to_string(),
            degree: "Master of Science in Software Engineering".to_string(),
            school: "University of Washington".to_string(),
            location: "Seattle, WA".to_string(),
            start_date: "2012-09".to_string(),
            end_date: "2014-06".to_string(),
        }],
        skills: vec![
            skill_group("Backend", &["Java", "Go", "Python", "Node.js"]),
            skill_group(
                "Cloud & DevOps",
                &["AWS", "Docker", "Kubernetes", "Terraform", "CI/CD"],
            ),
            skill_group("Databases", &["PostgreSQL", "DynamoDB", "Redis"]),
            skill_group(
                "Architecture",
                &["Microservices", "Event-Driven", "System Design"],
            ),
        ],
        projects: Vec::new(),
        certifications: vec![CertificationEntry {
            id: "1".to_string(),
            name: "AWS Certified Solutions Architect - Professional".to_string(),
            date: "2022-11".to_string(),
        }],
    }
}
