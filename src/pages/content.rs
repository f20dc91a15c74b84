pub struct WorkflowStep {
    pub title: &'static str,
    pub icon: &'static str,
    pub detail: &'static str,
}

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    pub note: &'static str,
}

pub const WORKFLOW_STEPS: [WorkflowStep; 4] = [
    WorkflowStep {
        title: "Crowd-Sourced Data",
        icon: "📱",
        detail: "Users capture images and video, which are geo-tagged and instantly routed to the backend via FastAPI.",
    },
    WorkflowStep {
        title: "YOLOv8 Identification",
        icon: "🤖",
        detail: "The system uses YOLOv8 for rapid object detection and UNet for satellite image change tracking.",
    },
    WorkflowStep {
        title: "Contextual Intelligence",
        icon: "🗄️",
        detail: "MongoDB stores geo-spatial data, and Pathway RAG provides real-time, context-aware threat assessment to the Admin Panel.",
    },
    WorkflowStep {
        title: "Real-time Visualization",
        icon: "⚡",
        detail: "Next.js and Mapbox visualize threat locations, speed, and trajectory, generating immediate alerts.",
    },
];

pub const TEAM_MEMBERS: [TeamMember; 5] = [
    TeamMember {
        name: "Abhineet",
        role: "Machine Learning Engineer",
        avatar: "abhineet",
        note: "Trains the detection models and keeps the satellite change-tracking pipeline honest.",
    },
    TeamMember {
        name: "Khushi",
        role: "Frontend Developer",
        avatar: "khushi",
        note: "Builds the admin panel and the map views the response teams live in.",
    },
    TeamMember {
        name: "Suryansh",
        role: "Mobile App Developer",
        avatar: "suryansh",
        note: "Owns the capture app that turns any phone into a field sensor.",
    },
    TeamMember {
        name: "Riva",
        role: "Frontend Developer",
        avatar: "riva",
        note: "Shapes the alerting surfaces so a warning is readable in under a second.",
    },
    TeamMember {
        name: "Akash",
        role: "Backend Developer",
        avatar: "akash",
        note: "Runs the ingestion APIs and the geo-spatial store behind them.",
    },
];

pub const TECHNOLOGIES: [&str; 14] = [
    "MongoDB",
    "Pathway RAG",
    "FastAPI",
    "Python",
    "Next.js",
    "Mapbox",
    "YOLOv8",
    "UNet",
    "Flutter",
    "Docker",
    "AWS",
    "GCP",
    "Prometheus",
    "Grafana",
];

/// How team cards react to the pointer. The two page variants share every
/// controller and differ only in presentation.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TeamHover {
    /// Two-sided flip exposing the member note.
    Flip,
    /// Lift and tilt with an intensified glow.
    Lift,
}

pub struct Presentation {
    pub headline: &'static str,
    pub description: &'static str,
    pub workflow_heading: &'static str,
    pub team_heading: &'static str,
    pub team_tagline: &'static str,
    pub team_badges: [&'static str; 2],
    pub stack_heading: &'static str,
    pub cta_heading: &'static str,
    pub cta_label: &'static str,
    pub team_hover: TeamHover,
    /// Suffix on avatar asset names, so variants can ship their own renders.
    pub avatar_suffix: &'static str,
}

impl Presentation {
    pub fn primary() -> Self {
        Self {
            headline: "AstraNet: The AI-Powered Early Warning Network",
            description: "AstraNet is an AI-powered defense intelligence network designed to detect, classify, and neutralize rogue aerial threats in real time. By integrating citizen-sourced data, advanced computer vision models, and real-time analytics, AstraNet transforms how defense ecosystems perceive and respond to low-cost, fast-moving drone incursions. It bridges the gap between detection and decision-making, turning raw sensor input into actionable intelligence for rapid threat response.",
            workflow_heading: "How It Works: Real-time Threat Correlation",
            team_heading: "Meet Team Aetherflux",
            team_tagline: "Elite professionals pioneering the future of aerial threat detection and response",
            team_badges: ["5 Core Members", "Specialized Team"],
            stack_heading: "Our Tech Arsenal",
            cta_heading: "Ready to See AstraNet in Action?",
            cta_label: "See the Live Dashboard",
            team_hover: TeamHover::Flip,
            avatar_suffix: "",
        }
    }

    pub fn preview() -> Self {
        Self {
            headline: "AstraNet: Eyes on Every Sky",
            description: "AstraNet fuses crowd-sourced sightings, computer vision, and live analytics into a single early-warning picture for low-flying drone incursions. Every report is classified, correlated, and placed on the map in seconds, so the people who have to act see a decision, not a data dump.",
            workflow_heading: "From Sighting to Response in Four Steps",
            team_heading: "The Team Behind AstraNet",
            team_tagline: "A small crew shipping aerial threat detection end to end",
            team_badges: ["5 Core Members", "Full-Stack Coverage"],
            stack_heading: "Built With",
            cta_heading: "See What AstraNet Sees",
            cta_label: "Open the Live Dashboard",
            team_hover: TeamHover::Lift,
            avatar_suffix: "-studio",
        }
    }
}
