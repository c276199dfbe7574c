//! Built-in sample data.

use super::model::{
    Activity, Board, CanvasIdea, Column, IdeaStatus, MemberRole, Paper, PaperNote, Presence,
    Priority, Project, ProjectIdea, ProjectStatus, Proposer, ReadingProgress, ReadingStatus, Stat,
    Task, TaskKind, TeamMember, Votes,
};
use super::Fixtures;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

pub(super) fn fixtures() -> Fixtures {
    Fixtures {
        stats: stats(),
        recent_reading: recent_reading(),
        papers: papers(),
        board: board(),
        canvas_ideas: canvas_ideas(),
        team_members: team_members(),
        team_activity: team_activity(),
        project_members: project_members(),
        project_activity: project_activity(),
        projects: projects(),
        project_ideas: project_ideas(),
    }
}

fn stat(label: &str, value: &str, caption: &str) -> Stat {
    Stat {
        label: label.to_string(),
        value: value.to_string(),
        caption: caption.to_string(),
    }
}

fn stats() -> Vec<Stat> {
    vec![
        stat("Papers Read", "127", "+12 this week"),
        stat("Active Projects", "3", "2 due this month"),
        stat("Team Members", "8", "Across all projects"),
        stat("Ideas Generated", "45", "15 this week"),
    ]
}

fn recent_reading() -> Vec<ReadingProgress> {
    let row = |title: &str, authors: &str, status, progress| ReadingProgress {
        title: title.to_string(),
        authors: authors.to_string(),
        status,
        progress,
    };
    vec![
        row("Deep Learning in Medical Imaging", "Smith et al.", ReadingStatus::Reading, 60),
        row("Quantum Computing Applications", "Johnson et al.", ReadingStatus::Summarized, 100),
        row("Climate Change Modeling", "Brown et al.", ReadingStatus::ToRead, 0),
    ]
}

fn papers() -> Vec<Paper> {
    vec![
        Paper {
            id: 1,
            title: "Attention Is All You Need".to_string(),
            authors: "Vaswani, A., et al.".to_string(),
            journal: "NeurIPS".to_string(),
            year: 2017,
            citations: 89234,
            status: ReadingStatus::Read,
            tags: strings(&["Transformers", "NLP", "Deep Learning"]),
            summary: "Introduced the Transformer architecture, revolutionizing \
                      sequence-to-sequence learning..."
                .to_string(),
            notes: vec![
                PaperNote {
                    id: "2".to_string(),
                    content: "Question: How does the computational complexity compare to \
                              LSTM? Need to investigate the O(n²) complexity for long sequences."
                        .to_string(),
                    timestamp: "2024-01-15 15:45".to_string(),
                    tags: strings(&["question", "complexity"]),
                },
                PaperNote {
                    id: "1".to_string(),
                    content: "Key insight: The attention mechanism allows the model to focus on \
                              relevant parts of the input sequence."
                        .to_string(),
                    timestamp: "2024-01-15 14:30".to_string(),
                    tags: strings(&["key-insight", "attention-mechanism"]),
                },
            ],
        },
        Paper {
            id: 2,
            title: "BERT: Pre-training of Deep Bidirectional Transformers".to_string(),
            authors: "Devlin, J., et al.".to_string(),
            journal: "NAACL".to_string(),
            year: 2019,
            citations: 67891,
            status: ReadingStatus::Reading,
            tags: strings(&["BERT", "NLP", "Pre-training"]),
            summary: "BERT obtains new state-of-the-art results on eleven natural language \
                      processing tasks..."
                .to_string(),
            notes: Vec::new(),
        },
        Paper {
            id: 3,
            title: "GPT-3: Language Models are Few-Shot Learners".to_string(),
            authors: "Brown, T., et al.".to_string(),
            journal: "NeurIPS".to_string(),
            year: 2020,
            citations: 45123,
            status: ReadingStatus::ToRead,
            tags: strings(&["GPT", "Few-shot Learning", "Language Models"]),
            summary: "We train GPT-3, an autoregressive language model with 175 billion \
                      parameters..."
                .to_string(),
            notes: Vec::new(),
        },
    ]
}

fn task(
    id: &str,
    title: &str,
    description: &str,
    assignee: &str,
    due_date: Option<&str>,
    tags: &[&str],
    kind: TaskKind,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        assignee: Some(assignee.to_string()),
        due_date: due_date.map(str::to_string),
        tags: strings(tags),
        kind,
    }
}

fn board() -> Board {
    let column = |id: &str, title: &str, tasks: Vec<Task>| Column {
        id: id.to_string(),
        title: title.to_string(),
        tasks,
    };
    Board {
        columns: vec![
            column(
                "backlog",
                "Backlog",
                vec![
                    task(
                        "1",
                        "Read Transformer Paper",
                        "Deep dive into 'Attention Is All You Need'",
                        "JD",
                        Some("Dec 15"),
                        &["Literature", "High Priority"],
                        TaskKind::Paper,
                    ),
                    task(
                        "2",
                        "Draft Introduction Section",
                        "Write intro for the literature review",
                        "SM",
                        Some("Dec 20"),
                        &["Writing"],
                        TaskKind::Task,
                    ),
                ],
            ),
            column(
                "in-progress",
                "In Progress",
                vec![task(
                    "3",
                    "BERT Implementation",
                    "Code up BERT model from scratch",
                    "AK",
                    Some("Dec 18"),
                    &["Coding", "ML"],
                    TaskKind::Task,
                )],
            ),
            column(
                "review",
                "Review",
                vec![task(
                    "4",
                    "Methodology Section",
                    "Review and refine methodology",
                    "JD",
                    Some("Dec 12"),
                    &["Writing", "Review"],
                    TaskKind::Task,
                )],
            ),
            column(
                "done",
                "Done",
                vec![task(
                    "5",
                    "Related Work Survey",
                    "Complete survey of related work",
                    "SM",
                    None,
                    &["Literature", "Complete"],
                    TaskKind::Paper,
                )],
            ),
        ],
    }
}

fn canvas_ideas() -> Vec<CanvasIdea> {
    let idea = |id: &str, title: &str, description: &str, category: &str, x, y| CanvasIdea {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        position: (x, y),
    };
    vec![
        idea(
            "1",
            "Multi-modal Learning",
            "Combine text and image processing for better understanding",
            "AI/ML",
            100,
            150,
        ),
        idea(
            "2",
            "Federated Learning Privacy",
            "Enhance privacy preservation in federated learning systems",
            "Privacy",
            400,
            200,
        ),
        idea(
            "3",
            "Interpretable AI",
            "Make AI decisions more transparent and explainable",
            "Explainability",
            250,
            350,
        ),
        idea(
            "4",
            "Edge Computing ML",
            "Optimize ML models for edge computing environments",
            "Systems",
            600,
            150,
        ),
    ]
}

fn member(
    id: &str,
    name: &str,
    email: &str,
    role: MemberRole,
    avatar: &str,
    status: Presence,
    contributions: u32,
) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        avatar: avatar.to_string(),
        status,
        contributions,
    }
}

fn team_members() -> Vec<TeamMember> {
    vec![
        member("1", "John Doe", "", MemberRole::Manager, "JD", Presence::Online, 24),
        member("2", "Sarah Miller", "", MemberRole::Researcher, "SM", Presence::Away, 18),
        member("3", "Alex Kim", "", MemberRole::Member, "AK", Presence::Online, 12),
        member("4", "Maria Garcia", "", MemberRole::Member, "MG", Presence::Offline, 8),
    ]
}

fn activity(user: &str, action: &str, target: &str, time: &str, details: Option<&str>) -> Activity {
    Activity {
        user: user.to_string(),
        action: action.to_string(),
        target: target.to_string(),
        time: time.to_string(),
        details: details.map(str::to_string),
    }
}

fn team_activity() -> Vec<Activity> {
    vec![
        activity("John Doe", "added paper", "Attention Is All You Need", "2 hours ago", None),
        activity("Sarah Miller", "completed task", "Literature Review Draft", "4 hours ago", None),
        activity("Alex Kim", "created idea", "Multi-modal Learning Approach", "6 hours ago", None),
        activity("Maria Garcia", "commented on", "Methodology Section", "1 day ago", None),
    ]
}

fn project_members() -> Vec<TeamMember> {
    vec![
        member(
            "1",
            "Dr. Sarah Wilson",
            "sarah.wilson@university.edu",
            MemberRole::Manager,
            "SW",
            Presence::Online,
            45,
        ),
        member(
            "2",
            "Prof. John Martinez",
            "john.martinez@university.edu",
            MemberRole::Supervisor,
            "JM",
            Presence::Away,
            38,
        ),
        member(
            "3",
            "Alex Chen",
            "alex.chen@university.edu",
            MemberRole::TeamLeader,
            "AC",
            Presence::Online,
            32,
        ),
        member(
            "4",
            "Maria Rodriguez",
            "maria.rodriguez@university.edu",
            MemberRole::Researcher,
            "MR",
            Presence::Online,
            28,
        ),
        member(
            "5",
            "David Kim",
            "david.kim@university.edu",
            MemberRole::Member,
            "DK",
            Presence::Offline,
            15,
        ),
    ]
}

fn project_activity() -> Vec<Activity> {
    vec![
        activity(
            "Dr. Sarah Wilson",
            "assigned paper",
            "Deep Learning in Medical Imaging",
            "2 hours ago",
            Some("to Alex Chen for review"),
        ),
        activity("Maria Rodriguez", "completed task", "Literature Review Summary", "4 hours ago", None),
        activity(
            "Alex Chen",
            "proposed idea",
            "Federated Learning Privacy Enhancement",
            "6 hours ago",
            None,
        ),
        activity("David Kim", "joined project", "AI in Healthcare Literature Review", "1 day ago", None),
        activity(
            "Prof. John Martinez",
            "commented on",
            "Multi-modal Learning Approach",
            "1 day ago",
            Some("Great potential for clinical applications"),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    name: &str,
    description: &str,
    members: u32,
    progress: u8,
    deadline: &str,
    status: ProjectStatus,
    counts: (u32, u32, u32),
) -> Project {
    let (papers, tasks, completed_tasks) = counts;
    Project {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        members,
        progress,
        deadline: deadline.to_string(),
        status,
        papers,
        tasks,
        completed_tasks,
    }
}

fn projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "AI in Healthcare Literature Review",
            "Comprehensive review of machine learning applications in medical diagnosis",
            4,
            75,
            "Dec 15, 2024",
            ProjectStatus::Active,
            (127, 12, 8),
        ),
        project(
            "2",
            "Grant Proposal - NSF",
            "Developing neural networks for climate modeling prediction",
            2,
            45,
            "Jan 20, 2025",
            ProjectStatus::Active,
            (89, 6, 3),
        ),
        project(
            "3",
            "Conference Paper Draft",
            "Novel approach to natural language processing in scientific literature",
            3,
            60,
            "Feb 10, 2025",
            ProjectStatus::Active,
            (156, 15, 10),
        ),
        project(
            "4",
            "Quantum Computing Research",
            "Exploring quantum algorithms for optimization problems",
            5,
            30,
            "Mar 15, 2025",
            ProjectStatus::Planning,
            (78, 8, 2),
        ),
    ]
}

fn project_ideas() -> Vec<ProjectIdea> {
    let proposer = |name: &str, avatar: &str, role: &str| Proposer {
        name: name.to_string(),
        avatar: avatar.to_string(),
        role: role.to_string(),
    };
    vec![
        ProjectIdea {
            id: "1".to_string(),
            title: "Multi-modal Deep Learning Approach".to_string(),
            description: "Investigate combining text and image processing for better medical \
                          diagnosis accuracy."
                .to_string(),
            proposed_by: proposer("Dr. Sarah Wilson", "SW", "Manager"),
            status: IdeaStatus::Approved,
            category: "AI/ML".to_string(),
            votes: Votes {
                upvotes: 8,
                downvotes: 1,
                user_vote: None,
            },
            comments: 12,
            created_at: "2024-01-15".to_string(),
            priority: Priority::High,
        },
        ProjectIdea {
            id: "2".to_string(),
            title: "Federated Learning Privacy Enhancement".to_string(),
            description: "Develop new privacy-preserving techniques for federated learning \
                          systems in healthcare data."
                .to_string(),
            proposed_by: proposer("Alex Chen", "AC", "Team Leader"),
            status: IdeaStatus::UnderReview,
            category: "Privacy".to_string(),
            votes: Votes {
                upvotes: 5,
                downvotes: 0,
                user_vote: None,
            },
            comments: 7,
            created_at: "2024-02-01".to_string(),
            priority: Priority::Medium,
        },
        ProjectIdea {
            id: "3".to_string(),
            title: "Interpretable AI Dashboard".to_string(),
            description: "Create a user-friendly dashboard that explains AI decision-making \
                          processes to non-technical users."
                .to_string(),
            proposed_by: proposer("Maria Rodriguez", "MR", "Researcher"),
            status: IdeaStatus::Proposed,
            category: "UX/UI".to_string(),
            votes: Votes {
                upvotes: 3,
                downvotes: 2,
                user_vote: None,
            },
            comments: 4,
            created_at: "2024-02-15".to_string(),
            priority: Priority::Low,
        },
    ]
}
