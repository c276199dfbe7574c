//! Research workspace records.

use serde::{Deserialize, Serialize};

/// Where a paper sits in the reading pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingStatus {
    ToRead,
    Reading,
    Read,
    Summarized,
}

impl ReadingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReadingStatus::ToRead => "To Read",
            ReadingStatus::Reading => "Reading",
            ReadingStatus::Read => "Read",
            ReadingStatus::Summarized => "Summarized",
        }
    }
}

/// A note attached to a paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperNote {
    pub id: String,
    pub content: String,
    pub timestamp: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    pub id: u32,
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub year: u16,
    pub citations: u32,
    pub status: ReadingStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub notes: Vec<PaperNote>,
}

impl Paper {
    /// Case-insensitive match against title, authors, or any tag.
    /// An empty (or blank) query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&query)
            || self.authors.to_lowercase().contains(&query)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query))
    }

    /// Prepend a note. Blank content is rejected.
    pub fn add_note(&mut self, content: &str, timestamp: String) -> bool {
        let content = content.trim();
        if content.is_empty() {
            return false;
        }
        let id = self.notes.len() + 1;
        self.notes.insert(
            0,
            PaperNote {
                id: id.to_string(),
                content: content.to_string(),
                timestamp,
                tags: Vec::new(),
            },
        );
        true
    }
}

/// Indices of the papers matching `query`, in their original order.
pub fn filter_papers(papers: &[Paper], query: &str) -> Vec<usize> {
    papers
        .iter()
        .enumerate()
        .filter(|(_, paper)| paper.matches(query))
        .map(|(i, _)| i)
        .collect()
}

/// Reading progress row on the personal dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingProgress {
    pub title: String,
    pub authors: String,
    pub status: ReadingStatus,
    /// Percent, 0 to 100.
    pub progress: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Paper,
    Task,
    Idea,
}

impl TaskKind {
    pub fn icon(&self) -> &'static str {
        match self {
            TaskKind::Paper => "📖",
            TaskKind::Task => "📅",
            TaskKind::Idea => "💡",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub kind: TaskKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Kanban board: columns in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    /// Move the task at `(column, task)` one column to the left (`-1`) or
    /// right (`1`), appending it there. Returns the new `(column, task)`
    /// position, or `None` when the move is out of bounds.
    pub fn move_task(&mut self, column: usize, task: usize, direction: isize) -> Option<(usize, usize)> {
        let target = column.checked_add_signed(direction)?;
        if target >= self.columns.len() || task >= self.columns.get(column)?.tasks.len() {
            return None;
        }
        let moved = self.columns[column].tasks.remove(task);
        self.columns[target].tasks.push(moved);
        Some((target, self.columns[target].tasks.len() - 1))
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}

/// A sticky note on the idea canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasIdea {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Canvas coordinates, in the same units the canvas was designed in.
    pub position: (u16, u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Manager,
    Supervisor,
    TeamLeader,
    Researcher,
    Member,
}

impl MemberRole {
    pub const ALL: [MemberRole; 5] = [
        MemberRole::Manager,
        MemberRole::Supervisor,
        MemberRole::TeamLeader,
        MemberRole::Researcher,
        MemberRole::Member,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MemberRole::Manager => "Manager",
            MemberRole::Supervisor => "Supervisor",
            MemberRole::TeamLeader => "Team Leader",
            MemberRole::Researcher => "Researcher",
            MemberRole::Member => "Member",
        }
    }

    pub fn permissions(&self) -> &'static [&'static str] {
        match self {
            MemberRole::Manager => &["all"],
            MemberRole::Supervisor => &["manage_members", "assign_tasks"],
            MemberRole::TeamLeader => &["assign_tasks", "review_work"],
            MemberRole::Researcher => &["create_ideas", "complete_tasks"],
            MemberRole::Member => &["view_only"],
        }
    }

    /// Next role in the list, wrapping around.
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|r| r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Online,
    Away,
    Offline,
}

impl Presence {
    pub fn symbol(&self) -> &'static str {
        match self {
            Presence::Online => "●",
            Presence::Away => "◐",
            Presence::Offline => "○",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: MemberRole,
    pub avatar: String,
    pub status: Presence,
    pub contributions: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub user: String,
    pub action: String,
    pub target: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Planning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub members: u32,
    /// Percent, 0 to 100.
    pub progress: u8,
    pub deadline: String,
    pub status: ProjectStatus,
    pub papers: u32,
    pub tasks: u32,
    pub completed_tasks: u32,
}

impl Project {
    /// Completed share of tasks in `0.0..=1.0`.
    pub fn task_ratio(&self) -> f64 {
        if self.tasks == 0 {
            return 0.0;
        }
        (f64::from(self.completed_tasks) / f64::from(self.tasks)).min(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vote {
    Up,
    Down,
}

/// Vote tally with the current user's own vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Votes {
    pub upvotes: u32,
    pub downvotes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_vote: Option<Vote>,
}

impl Votes {
    /// Cast `vote`. Casting the same vote again withdraws it; casting the
    /// opposite vote moves it.
    pub fn toggle(&mut self, vote: Vote) {
        match self.user_vote {
            Some(current) if current == vote => {
                self.retract(current);
                self.user_vote = None;
            }
            previous => {
                if let Some(previous) = previous {
                    self.retract(previous);
                }
                match vote {
                    Vote::Up => self.upvotes = self.upvotes.saturating_add(1),
                    Vote::Down => self.downvotes = self.downvotes.saturating_add(1),
                }
                self.user_vote = Some(vote);
            }
        }
    }

    fn retract(&mut self, vote: Vote) {
        match vote {
            Vote::Up => self.upvotes = self.upvotes.saturating_sub(1),
            Vote::Down => self.downvotes = self.downvotes.saturating_sub(1),
        }
    }

    pub fn score(&self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdeaStatus {
    Proposed,
    UnderReview,
    Approved,
    Rejected,
    InProgress,
}

impl IdeaStatus {
    pub fn label(&self) -> &'static str {
        match self {
            IdeaStatus::Proposed => "Proposed",
            IdeaStatus::UnderReview => "Under Review",
            IdeaStatus::Approved => "Approved",
            IdeaStatus::Rejected => "Rejected",
            IdeaStatus::InProgress => "In Progress",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposer {
    pub name: String,
    pub avatar: String,
    pub role: String,
}

/// An idea proposed inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectIdea {
    pub id: String,
    pub title: String,
    pub description: String,
    pub proposed_by: Proposer,
    pub status: IdeaStatus,
    pub category: String,
    #[serde(default)]
    pub votes: Votes,
    #[serde(default)]
    pub comments: u32,
    pub created_at: String,
    pub priority: Priority,
}

impl ProjectIdea {
    /// A fresh proposal from the current user. Both fields must be non-blank.
    pub fn propose(title: &str, description: &str, id: String, created_at: String) -> Option<Self> {
        let (title, description) = (title.trim(), description.trim());
        if title.is_empty() || description.is_empty() {
            return None;
        }
        Some(Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            proposed_by: Proposer {
                name: "Current User".to_string(),
                avatar: "CU".to_string(),
                role: "Member".to_string(),
            },
            status: IdeaStatus::Proposed,
            category: "General".to_string(),
            votes: Votes::default(),
            comments: 0,
            created_at,
            priority: Priority::Medium,
        })
    }
}

/// A headline number on the personal dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub caption: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(title: &str, authors: &str, tags: &[&str]) -> Paper {
        Paper {
            id: 1,
            title: title.to_string(),
            authors: authors.to_string(),
            journal: "NeurIPS".to_string(),
            year: 2017,
            citations: 0,
            status: ReadingStatus::ToRead,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            summary: String::new(),
            notes: Vec::new(),
        }
    }

    #[test]
    fn test_paper_matches_title_authors_and_tags() {
        let p = paper("Attention Is All You Need", "Vaswani, A., et al.", &["NLP"]);
        assert!(p.matches("attention"));
        assert!(p.matches("VASWANI"));
        assert!(p.matches("nlp"));
        assert!(p.matches("   "));
        assert!(!p.matches("quantum"));
    }

    #[test]
    fn test_filter_papers_keeps_order() {
        let papers = vec![
            paper("BERT", "Devlin", &["NLP"]),
            paper("ResNet", "He", &["Vision"]),
            paper("GPT-3", "Brown", &["NLP", "Language Models"]),
        ];
        assert_eq!(filter_papers(&papers, "nlp"), vec![0, 2]);
        assert_eq!(filter_papers(&papers, ""), vec![0, 1, 2]);
        assert!(filter_papers(&papers, "zzz").is_empty());
    }

    #[test]
    fn test_add_note_prepends_and_rejects_blank() {
        let mut p = paper("BERT", "Devlin", &[]);
        assert!(!p.add_note("   ", "t0".to_string()));
        assert!(p.add_note("first", "t1".to_string()));
        assert!(p.add_note("  second  ", "t2".to_string()));
        assert_eq!(p.notes.len(), 2);
        assert_eq!(p.notes[0].content, "second");
        assert_eq!(p.notes[1].content, "first");
    }

    #[test]
    fn test_vote_toggle_cycle() {
        let mut votes = Votes {
            upvotes: 3,
            downvotes: 2,
            user_vote: None,
        };

        votes.toggle(Vote::Up);
        assert_eq!((votes.upvotes, votes.downvotes), (4, 2));
        assert_eq!(votes.user_vote, Some(Vote::Up));

        // Switching moves the vote.
        votes.toggle(Vote::Down);
        assert_eq!((votes.upvotes, votes.downvotes), (3, 3));
        assert_eq!(votes.user_vote, Some(Vote::Down));
        assert_eq!(votes.score(), 0);

        // Same direction again withdraws it.
        votes.toggle(Vote::Down);
        assert_eq!((votes.upvotes, votes.downvotes), (3, 2));
        assert_eq!(votes.user_vote, None);
    }

    #[test]
    fn test_vote_counts_never_underflow() {
        let mut votes = Votes {
            upvotes: 0,
            downvotes: 0,
            user_vote: Some(Vote::Up),
        };
        votes.toggle(Vote::Up);
        assert_eq!(votes.upvotes, 0);
        assert_eq!(votes.user_vote, None);
    }

    #[test]
    fn test_vote_counts_saturate_at_max() {
        let mut votes = Votes {
            upvotes: u32::MAX,
            downvotes: u32::MAX,
            user_vote: None,
        };
        votes.toggle(Vote::Up);
        assert_eq!(votes.upvotes, u32::MAX);
        votes.toggle(Vote::Down);
        assert_eq!(votes.upvotes, u32::MAX - 1);
        assert_eq!(votes.downvotes, u32::MAX);
    }

    #[test]
    fn test_propose_requires_title_and_description() {
        assert!(ProjectIdea::propose("", "desc", "9".into(), "2024-03-01".into()).is_none());
        assert!(ProjectIdea::propose("title", "  ", "9".into(), "2024-03-01".into()).is_none());

        let idea = ProjectIdea::propose(" Title ", "Desc", "9".into(), "2024-03-01".into()).unwrap();
        assert_eq!(idea.title, "Title");
        assert_eq!(idea.status, IdeaStatus::Proposed);
        assert_eq!(idea.priority, Priority::Medium);
        assert_eq!(idea.category, "General");
        assert_eq!(idea.votes, Votes::default());
        assert_eq!(idea.proposed_by.name, "Current User");
    }

    fn board() -> Board {
        let task = |id: &str| Task {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            assignee: None,
            due_date: None,
            tags: Vec::new(),
            kind: TaskKind::Task,
        };
        Board {
            columns: vec![
                Column {
                    id: "backlog".into(),
                    title: "Backlog".into(),
                    tasks: vec![task("1"), task("2")],
                },
                Column {
                    id: "done".into(),
                    title: "Done".into(),
                    tasks: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_move_task_between_columns() {
        let mut b = board();
        assert_eq!(b.move_task(0, 1, 1), Some((1, 0)));
        assert_eq!(b.columns[0].tasks.len(), 1);
        assert_eq!(b.columns[1].tasks[0].id, "2");
        assert_eq!(b.task_count(), 2);
    }

    #[test]
    fn test_move_task_out_of_bounds() {
        let mut b = board();
        assert_eq!(b.move_task(0, 0, -1), None);
        assert_eq!(b.move_task(1, 0, 1), None);
        assert_eq!(b.move_task(1, 0, -1), None); // empty column
        assert_eq!(b.move_task(0, 5, 1), None);
        assert_eq!(b.task_count(), 2);
    }

    #[test]
    fn test_role_cycles() {
        assert_eq!(MemberRole::Manager.next(), MemberRole::Supervisor);
        assert_eq!(MemberRole::Member.next(), MemberRole::Manager);
    }

    #[test]
    fn test_project_task_ratio() {
        let project = Project {
            id: "1".into(),
            name: "X".into(),
            description: String::new(),
            members: 1,
            progress: 0,
            deadline: String::new(),
            status: ProjectStatus::Active,
            papers: 0,
            tasks: 12,
            completed_tasks: 8,
        };
        assert!((project.task_ratio() - 8.0 / 12.0).abs() < 1e-9);
    }
}
