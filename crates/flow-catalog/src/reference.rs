//! The built-in Agile/Scrum process flow.

use flow_core::{Phase, ProcessStep, StepType};
use once_cell::sync::Lazy;

use crate::store::ProcessModelStore;

static REFERENCE_STORE: Lazy<ProcessModelStore> =
    Lazy::new(|| ProcessModelStore::new(reference_phases(), reference_steps()));

/// Process-wide store over the reference catalog, built and validated on first use.
pub fn reference_store() -> &'static ProcessModelStore {
    &REFERENCE_STORE
}

pub fn reference_phases() -> Vec<Phase> {
    vec![
        Phase::new("initiation", "Initiation"),
        Phase::new("setup", "Setup & Kickoff"),
        Phase::new("planning", "Planning & Roadmap"),
        Phase::new("sprint", "Sprint Cycle"),
        Phase::new("release", "Release & Closure"),
    ]
}

const SCRUM_TEAM: &str = "Scrum Team (PO, SM and Dev Team)";

pub fn reference_steps() -> Vec<ProcessStep> {
    use StepType::{Action, Decision, Document, Meeting, Terminal, Workshop};

    vec![
        // initiation
        ProcessStep::new("business-needs", "Business Needs Document", Document, "initiation")
            .with_responsibility("Project Sponsor")
            .with_description("Outlines the high-level deliverables and analyzes the necessities of the project.")
            .with_content("What needs to be created, High-Level Deliverables, needs of the project will be analyzed."),
        ProcessStep::new("business-case", "Business Case", Document, "initiation")
            .with_responsibility("Project Sponsor")
            .with_description("Evaluates the economic feasibility and strategic justification for the project.")
            .with_content("Economic Feasibility Study."),
        ProcessStep::new("benefits-plan", "Benefits Management Plan", Document, "initiation")
            .with_responsibility("Project Sponsor")
            .with_description("Defines how and when the benefits of the project will be delivered and measured.")
            .with_content("How and when Benefits of the project will be derived and measured."),
        ProcessStep::new("project-charter", "Project Charter", Document, "initiation")
            .with_responsibility("Project Sponsor")
            .with_description("Purpose: Formal Authorization")
            .with_content("Name of the Project Manager, Responsibilities and Authority and Name of the Project Sponsor, Responsibilities and Authority, High level information."),
        ProcessStep::new("go-no-go", "Go / No-Go Decision", Decision, "initiation")
            .with_description("Determine if the project should proceed based on initiation documents."),

        // setup
        ProcessStep::new("methodology", "Select Methodology", Decision, "setup")
            .with_description("If Methodology = Agile, follow the process of methodology selected."),
        ProcessStep::new("kick-off", "KICK OFF MEETING", Meeting, "setup")
            .with_participants(SCRUM_TEAM)
            .with_description("Initial meeting to align the Scrum Team on ground rules and project objectives.")
            .with_content("Ground Rules."),
        ProcessStep::new("vision-statement", "Project Vision Statement", Document, "setup")
            .with_responsibility("Product Owner")
            .with_description("Defines the long-term goals, key features, and differentiators of the product.")
            .with_content("Project Objectives, Product/solution Description, Differentiators, Key Features and benefits."),
        ProcessStep::new("team-charter", "Team Charter", Document, "setup")
            .with_responsibility("Dev Team")
            .with_description("Establishes the working agreements, values, and ground rules for the development team.")
            .with_content("Ground Rules and team agreements."),
        ProcessStep::new("initial-backlog", "Initial Product Backlog", Document, "setup")
            .with_responsibility("Product Owner")
            .with_description("A high-level list of initial requirements, typically at the Epic or Feature level.")
            .with_content("High level requirements will be written (Requirements at Epic or themes or Features level)."),

        // planning
        ProcessStep::new("user-story-workshop", "USER STORY WRITING WORKSHOP", Workshop, "planning")
            .with_participants(SCRUM_TEAM)
            .with_description("Collaborative session to create user stories and define acceptance criteria.")
            .with_content("User stories will be written in the product backlog. DOD (Definition of Done) and DOR (Definition of Ready) will be written by Dev Team."),
        ProcessStep::new("product-backlog", "Product Backlog", Document, "planning")
            .with_responsibility("Product Owner / Dev Team")
            .with_description("The authoritative source of work for the team, ordered by value/priority.")
            .with_content("Prioritized list of work for the development team that is derived from the roadmap and its requirements."),
        ProcessStep::new("est-prior-workshop", "ESTIMATION / PRIORITIZATION WORKSHOP", Workshop, "planning")
            .with_participants(SCRUM_TEAM)
            .with_description("Workshop to estimate the effort for user stories and prioritize them.")
            .with_content("Story points will be given be Dev Team and User stories will be prioritized by Product Owner."),
        ProcessStep::new("roadmap", "Project/Product Roadmap", Document, "planning")
            .with_responsibility("Product owner")
            .with_description("Visual timeline outlining the strategic direction and major milestones of the product.")
            .with_content("Shows strategy and direction the project/product will take."),
        ProcessStep::new("release-planning", "RELEASE PLANNING MEETING", Meeting, "planning")
            .with_participants(SCRUM_TEAM)
            .with_description("Meeting to determine the release schedule, sprint cadence, and estimated costs.")
            .with_content("PO along with Team will decide: How many releases, How many sprints in each releases and sprints duration. Cost will be estimated."),
        ProcessStep::new("release-schedule", "Release Schedule", Document, "planning")
            .with_responsibility("Product Owner and Dev Team")
            .with_description("Timeline indicating when specific product releases are planned to occur.")
            .with_content("Plan showing when releases will happen."),
        ProcessStep::new("release-backlog", "Release Backlog", Document, "planning")
            .with_responsibility("Product Owner and Dev Team")
            .with_description("A subset of the Product Backlog selected for a specific upcoming release.")
            .with_content("Will have user stories that must be implemented in each release planned."),

        // sprint
        ProcessStep::new("sprint-zero", "Sprint Zero (Optional)", Action, "sprint")
            .with_description("Basic Preparation before starting working sprint."),
        ProcessStep::new("sprint-planning", "SPRINT PLANNING MEETING", Meeting, "sprint")
            .with_participants("Scrum Team (PO, Dev Team, SM)")
            .with_description("Meeting to plan the work for the upcoming Sprint and define the Sprint Goal.")
            .with_activities([
                "Sprint goal will be defined by Dev team.",
                "Dev Team will pick user stories from Product Backlog and forms sprint backlog.",
                "If any clarifications on the user stories needed, Dev team will clarify with PO.",
                "Dev team will decompose user stories in to tasks.",
                "User stories will be assigned to Devteam by themselves.",
            ]),
        ProcessStep::new("dor-check", "DoR Check", Decision, "sprint")
            .with_description("Does the work meet the Definition of Ready (DOR)?"),
        ProcessStep::new("sprint-backlog", "Sprint Backlog", Document, "sprint")
            .with_description("The set of Product Backlog items selected for the Sprint."),
        ProcessStep::new("execution", "Execution of the Sprint", Action, "sprint")
            .with_description("The daily work performed by the Development Team to implement user stories.")
            .with_activities([
                "Dev team will execute the tasks.",
                "Daily Standup Meeting: What's been done? What needs to be done? Any impediments?",
            ]),
        ProcessStep::new("daily-standup", "Daily Standup Meeting", Meeting, "sprint")
            .with_participants("SM and Dev Team")
            .with_description("A short daily meeting to synchronize activities and plan for the next 24 hours.")
            .with_activities([
                "What's been done since last meeting?",
                "What needs to be done before the next meeting?",
                "Any Issues or impediments?",
            ]),
        ProcessStep::new("dod-check", "DoD Check", Decision, "sprint")
            .with_description("Does the User Story (US) meet the Definition of Done (DOD)?"),
        ProcessStep::new("sprint-review", "Sprint Review Meeting", Meeting, "sprint")
            .with_participants(SCRUM_TEAM)
            .with_description("Meeting at the end of the Sprint to inspect the Increment and adapt the Product Backlog.")
            .with_activities([
                "Dev team will show the demo of user stories that meets DOD to PO.",
                "PO will accept or reject user stories and also provide changes/feedback.",
                "PO along with other scrum team members will discuss where to fit changes in Product Backlog.",
            ]),
        ProcessStep::new("sprint-retro", "Sprint Retrospective Meeting", Meeting, "sprint")
            .with_participants(SCRUM_TEAM)
            .with_description("Meeting to inspect the team's processes and create a plan for improvements.")
            .with_activities([
                "What went well and what not went well will be discussed.",
                "Any corrective or preventive measure will be defined.",
            ]),
        ProcessStep::new("grooming", "Grooming or Refinement", Workshop, "sprint")
            .with_description("Ongoing process of adding detail, estimates, and order to items in the Product Backlog."),

        // release
        ProcessStep::new("hardening", "Hardening Sprint (Optional)", Action, "release")
            .with_description("Perform activities that will help to launch the product (stabilization)."),
        ProcessStep::new("release-decision", "Release Planned?", Decision, "release")
            .with_description("Is a release planned for this cycle?"),
        ProcessStep::new("go-live", "Go-Live / Hand-Over to Customer", Terminal, "release")
            .with_description("Releasing the product increment to customers."),
        ProcessStep::new("project-closure", "Project Closure", Terminal, "release")
            .with_description("Formal closing of the project if this was the last release."),
    ]
}
