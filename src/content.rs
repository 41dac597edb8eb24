//! Literal portfolio content rendered by the page sections.

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub footer_blurb: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Sainath Gandhe",
    role: "Software Developer",
    tagline: "A passionate software engineering student with expertise in distributed systems, cloud computing, and full-stack development. I build scalable and efficient solutions to complex problems.",
    email: "gandhe.sainath@csu.fullerton.edu",
    phone: "714-519-7072",
    location: "Fullerton, CA",
    github: "https://github.com",
    linkedin: "https://linkedin.com",
    footer_blurb: "Software developer specializing in building scalable and efficient solutions to complex problems.",
};

pub struct About {
    pub portrait: &'static str,
    pub headline: &'static str,
    pub paragraphs: &'static [&'static str],
    pub stats: &'static [(&'static str, &'static str)],
}

pub const ABOUT: About = About {
    portrait: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
    headline: "A passionate software engineer focused on creating impactful solutions",
    paragraphs: &[
        "I am a highly adaptable software engineering student pursuing a Master's degree in Computer Science at California State University, Fullerton, with strong fundamentals in distributed systems, cloud computing, data structures, and algorithms.",
        "My passion lies in contributing to large-scale, real-time systems by solving scalability bottlenecks, optimizing services, and deploying impactful features. I thrive in dynamic environments where collaboration and continuous learning are emphasized.",
    ],
    stats: &[("1+", "Years of Experience"), ("5+", "Completed Projects")],
};

pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        company: "Boeing",
        role: "Software Developer",
        period: "Aug 2023 - Aug 2024",
        highlights: &[
            "Led the Critical Parts Tracking System (CPTS) project using SpringBoot for the back-end and Angular for the front-end, improving real-time tracking of critical aerospace parts.",
            "Designed and implemented new features for CPTS, focusing on creating a user-friendly interface that allowed team members to access real-time data.",
            "Conducted end-to-end testing for CPTS, validating the application's robustness and performance, reducing errors by 30%.",
            "Optimized the Wireless Business Management System (WBMS) using React for the front-end, reducing system latency by 15%.",
            "Implemented real-time data synchronization features in WBMS, allowing business teams to monitor wireless systems efficiently.",
            "Actively participated in Agile Scrum ceremonies to ensure continuous delivery of value.",
        ],
        technologies: &["SpringBoot", "Angular", "React", "Agile", "Testing"],
    },
    Experience {
        company: "Blocmatrix IT Solutions",
        role: "Software Developer Intern",
        period: "Feb 2023 - Jun 2023",
        highlights: &[
            "Designed and implemented distributed storage and query systems using AWS Lambda and DynamoDB, ensuring high availability.",
            "Built a scalable data pipeline leveraging Kubernetes, enabling real-time predictions and handling high-volume workloads.",
            "Developed an automated testing framework using Python, increasing code coverage by 30%.",
            "Participated in Agile ceremonies to drive team productivity and deliverables.",
            "Enhanced cross-functional collaboration by designing and implementing RESTful APIs.",
        ],
        technologies: &["AWS", "Kubernetes", "Python", "RESTful APIs", "DynamoDB", "Lambda"],
    },
    Experience {
        company: "Nullclass",
        role: "Web Developer Intern",
        period: "Oct 2022 - Dec 2022",
        highlights: &[
            "Created a cloud-based travel booking platform using React and Node.js, offering real-time booking capabilities.",
            "Designed and implemented distributed indexing mechanisms, reducing search response times by 35%.",
            "Conducted formal verification of critical modules to ensure operational reliability.",
            "Utilized property-based testing tools such as QuickCheck to identify edge-case failures.",
            "Collaborated with UX teams to refine the user interface, increasing usability scores by 25%.",
        ],
        technologies: &["React", "Node.js", "Cloud Services", "UX Design", "Testing"],
    },
    Experience {
        company: "Deloitte",
        role: "Virtual Experience Intern",
        period: "Aug 2022 - Sep 2022",
        highlights: &[
            "Automated data analysis workflows using Python and advanced scripting, achieving a 15% improvement in processing speed.",
            "Designed and deployed a secure, distributed ledger system utilizing blockchain principles to ensure data integrity.",
            "Engaged in theorem proving and symbolic execution methodologies for verifying complex financial models.",
            "Documented intricate processes and developed a comprehensive knowledge base for team-wide use.",
            "Participated in Agile project workflows, contributing to sprint reviews and planning.",
        ],
        technologies: &["Python", "Blockchain", "Agile", "Documentation", "Financial Modeling"],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub image: &'static str,
    pub live_demo: &'static str,
    pub repository: &'static str,
    /// GitHub linguist colour of the primary language.
    pub language_color: &'static str,
}

const VISIBLE_BADGES: usize = 3;

impl Project {
    /// Badges shown on the card, plus how many were left off.
    pub fn badges(&self) -> (&'static [&'static str], Option<usize>) {
        if self.tech.len() > VISIBLE_BADGES {
            (
                &self.tech[..VISIBLE_BADGES],
                Some(self.tech.len() - VISIBLE_BADGES),
            )
        } else {
            (self.tech, None)
        }
    }

    pub fn primary_tech(&self) -> Option<&'static str> {
        self.tech.first().copied()
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Dynamic Web Application for Inventory Management",
        description: "A full-stack inventory management application using Node.js and React that streamlines inventory tracking processes for small businesses, improving operational efficiency by 25%.",
        tech: &["Node.js", "React", "RESTful API", "Authentication", "CRUD"],
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&q=80",
        live_demo: "#",
        repository: "#",
        language_color: "#f1e05a",
    },
    Project {
        title: "Personalized Recommendation Engine for E-Commerce",
        description: "A recommendation engine using Python and collaborative filtering algorithms to deliver personalized user experiences. Enhanced recommendation accuracy by 15% through GenAI models.",
        tech: &["Python", "Deep Learning", "AWS Lambda", "GenAI", "RESTful API"],
        image: "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&q=80",
        live_demo: "#",
        repository: "#",
        language_color: "#3572A5",
    },
    Project {
        title: "Automated Code Analysis Tool",
        description: "A static code analysis tool using Python and abstract syntax trees, identifying vulnerabilities and ensuring adherence to best coding practices in distributed systems.",
        tech: &["Python", "AST", "D3.js", "Jenkins", "CI/CD"],
        image: "https://images.unsplash.com/photo-1531297484001-80022131f5a1?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&q=80",
        live_demo: "#",
        repository: "#",
        language_color: "#3572A5",
    },
    Project {
        title: "Stock Price Prediction using Machine Learning",
        description: "Applied LSTM and CNN to predict stock price movements, aiming to improve financial decision-making by forecasting stock trends based on historical data.",
        tech: &["Machine Learning", "LSTM", "CNN", "Financial Analysis", "Data Science"],
        image: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&q=80",
        live_demo: "#",
        repository: "#",
        language_color: "#DA5B0B",
    },
    Project {
        title: "G-Notify - A Personalized Mass Emailer",
        description: "A scalable mass mailing system enabling personalized content delivery to large audiences, optimizing email engagement through tailored messaging.",
        tech: &["Email Systems", "Personalization", "Scalable Architecture", "UX/UI"],
        image: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&q=80",
        live_demo: "#",
        repository: "#",
        language_color: "#2b7489",
    },
];

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "Programming Languages",
        skills: &["Java", "Python", "C++", "TypeScript", "JavaScript", "HTML5", "CSS3", "C#"],
    },
    SkillCategory {
        title: "Frameworks & Libraries",
        skills: &["React", ".NET", "Node.js", "Express.js", "Spring Boot", "Angular", "Flask"],
    },
    SkillCategory {
        title: "Database Management",
        skills: &["SQL", "PostgreSQL", "MongoDB"],
    },
    SkillCategory {
        title: "Software Development",
        skills: &[
            "RESTful APIs",
            "OOP",
            "Data Structures & Algorithms",
            "Agile/Scrum",
            "Unit Testing",
            "TDD",
            "API Development",
        ],
    },
    SkillCategory {
        title: "Cloud Platforms",
        skills: &["AWS (Lambda, EC2, S3)", "Azure"],
    },
    SkillCategory {
        title: "Tools",
        skills: &[
            "CI/CD",
            "JIRA",
            "Microsoft Office",
            "Jenkins",
            "Linux/Unix",
            "Docker",
            "Kubernetes",
            "Git",
        ],
    },
];

/// (name, icon path under `public/`)
pub const SKILL_LOGOS: &[(&str, &str)] = &[
    ("JavaScript", "/skills/javascript.svg"),
    ("TypeScript", "/skills/typescript.svg"),
    ("React", "/skills/react.svg"),
    ("Node.js", "/skills/nodejs.svg"),
    ("Python", "/skills/python.svg"),
    ("Java", "/skills/java.svg"),
    ("C++", "/skills/cpp.svg"),
    ("MongoDB", "/skills/mongodb.svg"),
    ("PostgreSQL", "/skills/postgresql.svg"),
    ("AWS", "/skills/aws.svg"),
    ("Docker", "/skills/docker.svg"),
    ("Git", "/skills/git.svg"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_overflow() {
        let (shown, more) = PROJECTS[0].badges();
        assert_eq!(shown, &["Node.js", "React", "RESTful API"]);
        assert_eq!(more, Some(2));

        let small = Project {
            tech: &["Rust", "Leptos"],
            ..PROJECTS[0]
        };
        assert_eq!(small.badges(), (&["Rust", "Leptos"][..], None));

        let exact = Project {
            tech: &["A", "B", "C"],
            ..PROJECTS[0]
        };
        assert_eq!(exact.badges().1, None);
    }

    #[test]
    fn test_primary_tech() {
        assert_eq!(PROJECTS[1].primary_tech(), Some("Python"));
        let none = Project {
            tech: &[],
            ..PROJECTS[1]
        };
        assert_eq!(none.primary_tech(), None);
    }

    #[test]
    fn test_content_complete() {
        assert!(EXPERIENCE
            .iter()
            .all(|e| !e.highlights.is_empty() && !e.technologies.is_empty()));
        assert!(SKILLS.iter().all(|c| !c.skills.is_empty()));
        assert!(SKILL_LOGOS
            .iter()
            .all(|(_, icon)| icon.starts_with("/skills/") && icon.ends_with(".svg")));
        assert!(PROFILE.email.contains('@'));
    }
}
