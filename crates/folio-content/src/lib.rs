//! Static portfolio content: profile, skills, projects, testimonials, and
//! the per-page boot scripts.

pub mod banner;

/// Contact details and headline identity.
pub mod profile {
    pub const NAME: &str = "LYLE_CHADYA";
    pub const TITLE: &str = "UI/UX DESIGNER & FRONT-END DEVELOPER";
    pub const TAGLINE: &str = "AVAILABLE FOR HIRE";
    pub const EMAIL: &str = "lylechadya139@gmail.com";
    pub const PHONE: &str = "+263 77 531 2695";
    pub const GITHUB: &str = "https://github.com/lyle-bongani";
    pub const LINKEDIN: &str = "https://www.linkedin.com/in/lyle-chadya-368930358/";

    pub const BIO: &str = "I'm Lyle Chadya, a Web Developer & UI/UX Designer with a passion for \
creating innovative digital experiences.";
    pub const JOURNEY: &str = "After joining Uncommon.org's bootcamp in Bulawayo, I embarked on \
an exciting journey into web development and design.";
    pub const VISION: &str = "As I continue to grow in the development space, I'm eager to build \
impactful digital experiences, explore new technologies, and contribute to innovative projects.";
}

/// Headline stat shown on the home page metrics grid.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "5", label: "UI Designs" },
    Stat { value: "7", label: "Graphic Designs" },
    Stat { value: "15", label: "Dev Projects" },
    Stat { value: "100%", label: "Satisfied Clients" },
];

/// A command offered by the home page terminal panel.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
}

pub const COMMANDS: &[Command] = &[
    Command { name: "portfolio", description: "View design portfolio" },
    Command { name: "projects", description: "Browse frontend projects" },
    Command { name: "ui-kit", description: "Access component library" },
    Command { name: "contact", description: "Initialize communication" },
];

/// Per-page boot scripts, verbatim from the site.
pub mod boot {
    pub const HOME: &[&str] = &[
        "Initializing design system...",
        "Loading UI components...",
        "Establishing creative connection...",
        "Mounting design assets...",
        "Starting frontend modules...",
        "Activating UX protocols...",
        "System ready.",
    ];

    pub const ABOUT: &[&str] = &[
        "> INITIALIZING_PERSONAL_DATA",
        "> LOADING_BACKGROUND_INFO",
        "> ACCESSING_JOURNEY_DETAILS",
        "> SYSTEM_READY",
    ];

    pub const SKILLS: &[&str] = &[
        "> LOADING_SKILL_MATRIX",
        "> ANALYZING_CAPABILITIES",
        "> INITIALIZING_TECH_STACK",
        "> SYSTEM_READY",
    ];

    pub const PROJECTS: &[&str] = &[
        "> INITIALIZING_PROJECT_MATRIX",
        "> LOADING_PORTFOLIO_DATA",
        "> RENDERING_INTERFACE",
        "> SYSTEM_READY",
    ];

    pub const TESTIMONIALS: &[&str] = &[
        "Initializing feedback matrix...",
        "Loading client testimonials...",
        "Processing user experiences...",
        "System ready.",
    ];

    pub const CONTACT: &[&str] = &[
        "Initializing contact interface...",
        "Establishing secure channels...",
        "Loading communication protocols...",
        "System ready.",
    ];
}

/// A named skill with a proficiency percentage.
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub proficiency: u8,
}

/// A titled group of skills.
#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Design",
        skills: &[
            Skill { name: "UI/UX Design", proficiency: 90 },
            Skill { name: "Wireframing", proficiency: 85 },
            Skill { name: "Prototyping", proficiency: 85 },
            Skill { name: "User Research", proficiency: 80 },
            Skill { name: "Visual Design", proficiency: 90 },
            Skill { name: "Figma", proficiency: 95 },
            Skill { name: "Graphic Design", proficiency: 85 },
        ],
    },
    SkillCategory {
        title: "Frontend",
        skills: &[
            Skill { name: "HTML/CSS", proficiency: 95 },
            Skill { name: "JavaScript (ES6+)", proficiency: 90 },
            Skill { name: "TypeScript", proficiency: 85 },
            Skill { name: "React", proficiency: 90 },
            Skill { name: "Next.js", proficiency: 85 },
            Skill { name: "Tailwind CSS", proficiency: 95 },
            Skill { name: "Styled Components", proficiency: 85 },
            Skill { name: "Framer Motion", proficiency: 80 },
        ],
    },
    SkillCategory {
        title: "Backend",
        skills: &[Skill { name: "Node.js", proficiency: 80 }],
    },
    SkillCategory {
        title: "Tools & Methods",
        skills: &[
            Skill { name: "VSCode", proficiency: 95 },
            Skill { name: "GitHub", proficiency: 90 },
            Skill { name: "Windsurf", proficiency: 85 },
            Skill { name: "Cursor", proficiency: 90 },
            Skill { name: "Figma", proficiency: 95 },
            Skill { name: "Canva", proficiency: 90 },
            Skill { name: "Wix", proficiency: 85 },
            Skill { name: "WordPress", proficiency: 80 },
        ],
    },
];

/// Development or design work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Dev,
    Design,
}

/// A portfolio project entry.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub kind: ProjectKind,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Fudo Restaurant",
        description: "A modern restaurant website with online ordering capabilities.",
        kind: ProjectKind::Dev,
        technologies: &["React", "Next.js", "Tailwind CSS"],
        live_url: "https://fudo-cyan.vercel.app/",
        github_url: Some("https://github.com/lyle-bongani/Fudo.git"),
    },
    Project {
        title: "Fry Lyle",
        description: "A food delivery application with real-time order tracking and seamless \
checkout process.",
        kind: ProjectKind::Dev,
        technologies: &["TypeScript", "React", "Tailwind CSS", "Food Delivery API"],
        live_url: "https://typscript-portfolio.vercel.app/",
        github_url: Some("https://github.com/lyle-bongani/typscript-portfolio"),
    },
    Project {
        title: "PokéDex",
        description: "A Pokémon encyclopedia application.",
        kind: ProjectKind::Dev,
        technologies: &["React", "PokeAPI", "CSS"],
        live_url: "https://pok-dex-iota.vercel.app/",
        github_url: Some("https://github.com/lyle-bongani/Pok-Dex.git"),
    },
    Project {
        title: "Real Estate Platform",
        description: "Modern real estate platform design with property listings and search.",
        kind: ProjectKind::Design,
        technologies: &[],
        live_url: "https://www.figma.com/proto/ZaW7HoEmD2mdjQgHWm5KnS/REAL-LYLE-ESTATE?node-id=11-2&starting-point-node-id=11%3A2&scaling=scale-down-width&content-scaling=fixed&t=Ta0bcEthezPAx65d-1",
        github_url: None,
    },
    Project {
        title: "Jameson Website",
        description: "Redesign concept for Jameson whiskey website.",
        kind: ProjectKind::Design,
        technologies: &[],
        live_url: "https://www.figma.com/proto/cxlKc7PYVLrqTVycRTNQW6/JAMESON-LYLE?node-id=1-2&t=VLmfmUzFtI9DnPRY-1",
        github_url: None,
    },
    Project {
        title: "Luxury Watch Retail",
        description: "E-commerce design for luxury timepieces.",
        kind: ProjectKind::Design,
        technologies: &[],
        live_url: "https://www.figma.com/proto/4fBZUDfiTLPVER1IUI1YP1/Luxury-watch-retail-lyle?node-id=17-3913&t=8XL61VvKZEIsvmzR-1",
        github_url: None,
    },
    Project {
        title: "Food App Design",
        description: "Mobile app design for food delivery service.",
        kind: ProjectKind::Design,
        technologies: &[],
        live_url: "https://www.figma.com/proto/g0wVjkoplcHQAwNV0ESare/Food-app-design-Lyle?node-id=87-70&starting-point-node-id=27%3A2&t=pv4xNut81s26VsDO-1",
        github_url: None,
    },
];

/// Client feedback shown in the testimonial carousel.
#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub message: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Tonderai Kawere",
        role: "Software Development Instructor @Uncommon.org",
        message: "Lyle's dedication to clean code and modern design principles is impressive. \
His work on our projects demonstrated strong problem-solving skills and attention to detail.",
        rating: 5,
    },
    Testimonial {
        name: "Gracious Tshabangu",
        role: "Digital Marketing Instructor @Uncommon.org",
        message: "Working with Lyle was a great experience. His understanding of UI/UX \
principles and ability to implement complex features efficiently made him a valuable team member.",
        rating: 5,
    },
    Testimonial {
        name: "Dylan",
        role: "UI/UX Design Instructor @Uncommon.org",
        message: "Lyle consistently delivered high-quality work and showed great initiative in \
improving our project workflows. His cyberpunk-inspired designs brought a unique perspective to \
our applications.",
        rating: 5,
    },
];

/// Highlighted past work shown on the about page.
#[derive(Debug, Clone, Copy)]
pub struct ExecutedProgram {
    pub name: &'static str,
    pub summary: &'static str,
}

pub const EXECUTED_PROGRAMS: &[ExecutedProgram] = &[
    ExecutedProgram {
        name: "Jamason Website",
        summary: "Enhanced user experience and modern interface implementation",
    },
    ExecutedProgram {
        name: "Camps Pharmaceuticals",
        summary: "Developed professional web presence for healthcare sector",
    },
    ExecutedProgram {
        name: "Quiily Bot",
        summary: "A chatbot built for development and learning purposes",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_scripts_are_nonempty_and_end_ready() {
        for script in [
            boot::HOME,
            boot::ABOUT,
            boot::SKILLS,
            boot::PROJECTS,
            boot::TESTIMONIALS,
            boot::CONTACT,
        ] {
            assert!(!script.is_empty());
            let last = script.last().unwrap().to_uppercase();
            assert!(last.contains("READY"), "script ends with {last:?}");
        }
    }

    #[test]
    fn proficiencies_are_percentages() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty());
            for skill in category.skills {
                assert!(skill.proficiency <= 100);
            }
        }
    }

    #[test]
    fn dev_projects_carry_source_links() {
        for project in PROJECTS {
            match project.kind {
                ProjectKind::Dev => {
                    assert!(project.github_url.is_some(), "{}", project.title);
                    assert!(!project.technologies.is_empty());
                }
                ProjectKind::Design => assert!(project.live_url.contains("figma.com")),
            }
        }
    }

    #[test]
    fn ratings_fit_a_five_star_scale() {
        for t in TESTIMONIALS {
            assert!((1..=5).contains(&t.rating));
        }
    }
}
