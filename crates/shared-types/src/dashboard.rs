use crate::Role;

/// Status shown on a record row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    Pending,
    Interview,
    Hired,
    Active,
    Scheduled,
    Completed,
}

impl RecordStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Pending => "Pending",
            RecordStatus::Interview => "Interview",
            RecordStatus::Hired => "Hired",
            RecordStatus::Active => "Active",
            RecordStatus::Scheduled => "Scheduled",
            RecordStatus::Completed => "Completed",
        }
    }

    /// Statuses that still need someone to act.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            RecordStatus::Pending | RecordStatus::Interview | RecordStatus::Scheduled
        )
    }
}

/// One aggregate counter card.
#[derive(Debug, Clone, PartialEq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: &'static str,
    pub hint: &'static str,
}

/// One row in a dashboard list (application, posting, mentee...).
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSummary {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub meta: &'static str,
    pub status: RecordStatus,
}

/// A sidebar entry. Selecting it swaps the main panel in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSection {
    pub id: &'static str,
    pub label: &'static str,
}

/// Content behind one sidebar section other than the overview.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPanel {
    pub section: &'static str,
    pub description: &'static str,
    /// Filter chips above the rows. Only the job search uses them.
    pub filters: &'static [&'static str],
    /// Label and value pairs for profile-style panels.
    pub fields: &'static [(&'static str, &'static str)],
    pub records: Vec<RecordSummary>,
    /// Shown when the panel has neither fields nor records.
    pub empty_message: &'static str,
}

impl SectionPanel {
    fn new(section: &'static str, description: &'static str) -> Self {
        Self {
            section,
            description,
            filters: &[],
            fields: &[],
            records: Vec::new(),
            empty_message: "Nothing to show here yet.",
        }
    }

    fn filters(mut self, filters: &'static [&'static str]) -> Self {
        self.filters = filters;
        self
    }

    fn fields(mut self, fields: &'static [(&'static str, &'static str)]) -> Self {
        self.fields = fields;
        self
    }

    fn records(mut self, records: Vec<RecordSummary>) -> Self {
        self.records = records;
        self
    }

    fn empty(mut self, message: &'static str) -> Self {
        self.empty_message = message;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.records.is_empty()
    }
}

/// Everything a role's dashboard displays. Placeholder content only; no
/// value here is derived from the session.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViewModel {
    pub role: Role,
    pub sections: &'static [DashboardSection],
    pub stats: Vec<StatTile>,
    pub records_title: &'static str,
    pub records: Vec<RecordSummary>,
    pub quick_actions: &'static [&'static str],
    pub panels: Vec<SectionPanel>,
}

const fn section(id: &'static str, label: &'static str) -> DashboardSection {
    DashboardSection { id, label }
}

const JOBSEEKER_SECTIONS: &[DashboardSection] = &[
    section("overview", "Dashboard"),
    section("profile", "Profile"),
    section("jobs", "Find Jobs"),
    section("applications", "Applications"),
    section("saved", "Saved Jobs"),
    section("settings", "Settings"),
];

const EMPLOYER_SECTIONS: &[DashboardSection] = &[
    section("overview", "Dashboard"),
    section("profile", "Company Profile"),
    section("internships", "Internship Postings"),
    section("applications", "Applications Received"),
    section("mentor-requests", "Mentor Requests"),
    section("employees", "Employees"),
];

const MENTOR_SECTIONS: &[DashboardSection] = &[
    section("overview", "Overview"),
    section("mentees", "My Mentees"),
    section("sessions", "Sessions"),
    section("resources", "Resources"),
    section("messages", "Messages"),
    section("profile", "Profile"),
    section("settings", "Settings"),
];

const EMPLOYEE_SECTIONS: &[DashboardSection] = &[
    section("overview", "Overview"),
    section("applications", "Applications"),
    section("profile", "My Profile"),
    section("company", "Company"),
    section("security", "Security"),
    section("notifications", "Notifications"),
    section("settings", "Preferences"),
];

const ADMIN_SECTIONS: &[DashboardSection] = &[
    section("overview", "Dashboard"),
    section("users", "Users"),
    section("companies", "Companies"),
    section("jobs", "Jobs"),
    section("analytics", "Analytics"),
    section("settings", "Settings"),
];

fn stat(label: &'static str, value: &'static str, hint: &'static str) -> StatTile {
    StatTile { label, value, hint }
}

fn record(
    title: &'static str,
    subtitle: &'static str,
    meta: &'static str,
    status: RecordStatus,
) -> RecordSummary {
    RecordSummary {
        title,
        subtitle,
        meta,
        status,
    }
}

impl DashboardViewModel {
    /// The placeholder dashboard for a role.
    pub fn placeholder(role: Role) -> Self {
        match role {
            Role::Jobseeker => Self::jobseeker(),
            Role::Employer => Self::employer(),
            Role::Mentor => Self::mentor(),
            Role::Employee => Self::employee(),
            Role::Admin => Self::admin(),
        }
    }

    /// Label of a section id, if the dashboard has it.
    pub fn section_label(&self, id: &str) -> Option<&'static str> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.label)
    }

    /// Panel for a section id. The overview and the settings link have none.
    pub fn panel(&self, id: &str) -> Option<&SectionPanel> {
        self.panels.iter().find(|p| p.section == id)
    }

    /// Number of records still awaiting action.
    pub fn open_records(&self) -> usize {
        self.records.iter().filter(|r| r.status.is_open()).count()
    }

    fn jobseeker() -> Self {
        Self {
            role: Role::Jobseeker,
            sections: JOBSEEKER_SECTIONS,
            stats: vec![
                stat("Profile Completion", "75%", "Add skills to reach 100%"),
                stat("Applications", "12", "3 this week"),
                stat("Interviews", "3", "Next on Thursday"),
                stat("Saved Jobs", "8", "2 closing soon"),
            ],
            records_title: "Recommended Jobs",
            records: recommended_jobs(),
            quick_actions: &["Update Profile", "Browse Jobs", "Upload Resume"],
            panels: vec![
                SectionPanel::new("profile", "Keep your profile current to get noticed").fields(&[
                    ("Headline", "Aspiring software engineer"),
                    ("Education", "B.S. Computer Science"),
                    ("Experience", "2 internships"),
                    ("Skills", "Add your skills"),
                    ("Location", "San Francisco, CA"),
                ]),
                SectionPanel::new("jobs", "Roles matched to your profile")
                    .filters(&["All Industries", "Technology", "Healthcare", "Finance", "Education"])
                    .records(recommended_jobs()),
                SectionPanel::new("applications", "Where each application stands")
                    .records(vec![
                        record(
                            "Frontend Developer Intern",
                            "BrightApps",
                            "Applied 2024-01-10",
                            RecordStatus::Interview,
                        ),
                        record(
                            "Data Analyst Intern",
                            "FinEdge",
                            "Applied 2024-01-08",
                            RecordStatus::Pending,
                        ),
                        record(
                            "QA Engineer",
                            "TestWorks",
                            "Applied 2023-12-18",
                            RecordStatus::Completed,
                        ),
                    ])
                    .empty("Start applying to jobs to see your applications here."),
                SectionPanel::new("saved", "Jobs you bookmarked for later")
                    .records(vec![
                        record(
                            "Backend Engineer",
                            "CloudNine",
                            "Remote · Closes in 3 days",
                            RecordStatus::Active,
                        ),
                        record(
                            "Mobile Developer",
                            "AppForge",
                            "Austin, TX · Closes in 5 days",
                            RecordStatus::Active,
                        ),
                    ])
                    .empty("Save interesting jobs to view them later."),
            ],
        }
    }

    fn employer() -> Self {
        Self {
            role: Role::Employer,
            sections: EMPLOYER_SECTIONS,
            stats: vec![
                stat("Active Internships", "3", "Engineering and Design"),
                stat("Applications", "245", "89 in screening"),
                stat("Interviews", "34", "12 in final round"),
                stat("Hires", "6", "8 offers out"),
            ],
            records_title: "Recent Applications",
            records: employer_applicants(),
            quick_actions: &["Post Internship", "Review Applications", "Request Mentor"],
            panels: vec![
                SectionPanel::new("profile", "How candidates see your company").fields(&[
                    ("Industry", "Technology"),
                    ("Company Size", "51-200 employees"),
                    ("Headquarters", "San Francisco, CA"),
                    ("Website", "Add your website"),
                ]),
                SectionPanel::new("internships", "Open postings and how they are performing")
                    .records(vec![
                        record(
                            "Senior Full Stack Developer",
                            "Engineering · $120k - $160k",
                            "45 applications · 287 views",
                            RecordStatus::Active,
                        ),
                        record(
                            "DevOps Engineer",
                            "Engineering · $110k - $140k",
                            "38 applications · 203 views",
                            RecordStatus::Active,
                        ),
                        record(
                            "UX/UI Designer",
                            "Design · $90k - $120k",
                            "42 applications · 189 views",
                            RecordStatus::Active,
                        ),
                    ]),
                SectionPanel::new("applications", "Candidates who applied to your postings")
                    .records(employer_applicants()),
                SectionPanel::new("mentor-requests", "Mentoring you asked for your interns")
                    .records(vec![
                        record(
                            "Engineering mentor",
                            "Frontend interns · 3 participants",
                            "Requested 2024-01-12",
                            RecordStatus::Pending,
                        ),
                        record(
                            "Product mentor",
                            "Product interns · 2 participants",
                            "Requested 2024-01-05",
                            RecordStatus::Scheduled,
                        ),
                    ]),
                SectionPanel::new("employees", "Staff linked to your company account")
                    .empty("Approved employee requests will appear here."),
            ],
        }
    }

    fn mentor() -> Self {
        Self {
            role: Role::Mentor,
            sections: MENTOR_SECTIONS,
            stats: vec![
                stat("Active Mentees", "12", "2 new this month"),
                stat("Sessions This Week", "5", "Next at 14:00"),
                stat("Average Rating", "4.9", "From 48 reviews"),
                stat("Hours Mentored", "86", "Since joining"),
            ],
            records_title: "Upcoming Sessions",
            records: mentor_sessions(),
            quick_actions: &["Schedule Session", "Share Resource", "Message Mentees"],
            panels: vec![
                SectionPanel::new("mentees", "People you are guiding").records(vec![
                    record(
                        "Priya Sharma",
                        "Frontend developer track",
                        "Since November 2023",
                        RecordStatus::Active,
                    ),
                    record(
                        "Jordan Lee",
                        "Backend interview preparation",
                        "Since December 2023",
                        RecordStatus::Active,
                    ),
                    record(
                        "Ana Costa",
                        "Career switch to UX",
                        "Finished January 2024",
                        RecordStatus::Completed,
                    ),
                ]),
                SectionPanel::new("sessions", "Booked and past mentoring sessions")
                    .records(mentor_sessions()),
                SectionPanel::new("resources", "Material shared with your mentees").records(vec![
                    record(
                        "System Design Primer",
                        "Guide",
                        "Shared with 8 mentees",
                        RecordStatus::Active,
                    ),
                    record(
                        "Resume Template",
                        "Document",
                        "Shared with 12 mentees",
                        RecordStatus::Active,
                    ),
                    record(
                        "Mock Interview Checklist",
                        "Checklist",
                        "Shared with 5 mentees",
                        RecordStatus::Active,
                    ),
                ]),
                SectionPanel::new("messages", "Latest conversations").records(vec![
                    record(
                        "Priya Sharma",
                        "Thanks for the feedback on my portfolio!",
                        "2 hours ago",
                        RecordStatus::Pending,
                    ),
                    record(
                        "Jordan Lee",
                        "Can we move Friday's session?",
                        "Yesterday",
                        RecordStatus::Pending,
                    ),
                ]),
                SectionPanel::new("profile", "What mentees see before booking").fields(&[
                    ("Expertise", "Frontend engineering, career growth"),
                    ("Experience", "10+ years"),
                    ("Availability", "Weekday evenings"),
                    ("Session Length", "45 minutes"),
                ]),
            ],
        }
    }

    fn employee() -> Self {
        Self {
            role: Role::Employee,
            sections: EMPLOYEE_SECTIONS,
            stats: vec![
                stat("Status", "Active", "Account in good standing"),
                stat("Role", "Employee", "Read-only access"),
                stat("Company Link", "Linked", "Verified by employer"),
                stat("Join Date", "Recently Verified", "Welcome aboard"),
            ],
            records_title: "Company Applications",
            records: employee_applications(),
            quick_actions: &["My Profile", "Company", "Preferences"],
            panels: vec![
                SectionPanel::new("applications", "Applications your company received")
                    .records(employee_applications()),
                SectionPanel::new("profile", "Update your personal details").fields(&[
                    ("Department", "Engineering"),
                    ("Position", "Team member"),
                    ("Status", "Active"),
                ]),
                SectionPanel::new("company", "View linked company info").fields(&[
                    ("Company Link", "Linked"),
                    ("Access", "Read-only"),
                    ("Verification", "Recently Verified"),
                ]),
                SectionPanel::new("security", "Sign-in and device safety").fields(&[
                    ("Password", "Last changed recently"),
                    ("Two-Factor Authentication", "Not enabled"),
                    ("Active Sessions", "1 device"),
                ]),
                SectionPanel::new("notifications", "What we email you about").fields(&[
                    ("Application Updates", "On"),
                    ("Company Announcements", "On"),
                    ("Newsletter", "Off"),
                ]),
            ],
        }
    }

    fn admin() -> Self {
        Self {
            role: Role::Admin,
            sections: ADMIN_SECTIONS,
            stats: vec![
                stat("Total Users", "1,284", "+36 this week"),
                stat("Companies", "57", "4 awaiting review"),
                stat("Active Jobs", "4", "90 applications"),
                stat("Mentors", "23", "All verified"),
            ],
            records_title: "Job Postings",
            records: admin_jobs(),
            quick_actions: &["Review Companies", "Manage Users", "Export Report"],
            panels: vec![
                SectionPanel::new("users", "Everyone registered on the platform").records(vec![
                    record(
                        "John Doe",
                        "john@example.com",
                        "Job seeker · Joined 2024-01-20",
                        RecordStatus::Active,
                    ),
                    record(
                        "Jane Smith",
                        "jane@techcorp.test",
                        "Employer · Joined 2024-01-18",
                        RecordStatus::Active,
                    ),
                    record(
                        "Michael Brown",
                        "michael@example.com",
                        "Mentor · Joined 2024-01-16",
                        RecordStatus::Pending,
                    ),
                ]),
                SectionPanel::new("companies", "Employer accounts and their verification")
                    .records(vec![
                        record(
                            "TechCorp Inc",
                            "Technology",
                            "2 open jobs",
                            RecordStatus::Active,
                        ),
                        record(
                            "HealthPlus Medical",
                            "Healthcare",
                            "Verification documents submitted",
                            RecordStatus::Pending,
                        ),
                        record(
                            "EduTech Solutions",
                            "Education",
                            "1 open job",
                            RecordStatus::Active,
                        ),
                    ]),
                SectionPanel::new("jobs", "Every posting across companies").records(admin_jobs()),
                SectionPanel::new("analytics", "Platform activity at a glance").fields(&[
                    ("Applications This Month", "90"),
                    ("Average Applications per Job", "22.5"),
                    ("Verification Backlog", "4 companies"),
                    ("Newsletter Reach", "1,234 users"),
                ]),
            ],
        }
    }
}

fn recommended_jobs() -> Vec<RecordSummary> {
    vec![
        record(
            "Senior Software Engineer",
            "TechCorp Inc.",
            "San Francisco, CA · $120k - $160k · Full-time",
            RecordStatus::Active,
        ),
        record(
            "Product Manager",
            "InnovateLab",
            "New York, NY · $100k - $140k · Full-time",
            RecordStatus::Active,
        ),
        record(
            "UX Designer",
            "DesignStudio",
            "Remote · $80k - $110k · Contract",
            RecordStatus::Active,
        ),
    ]
}

fn employer_applicants() -> Vec<RecordSummary> {
    vec![
        record(
            "Sarah Chen",
            "Senior Full Stack Developer",
            "Applied 2024-01-15 · San Francisco, CA",
            RecordStatus::Interview,
        ),
        record(
            "Marcus Rodriguez",
            "DevOps Engineer",
            "Applied 2024-01-14 · Austin, TX",
            RecordStatus::Pending,
        ),
        record(
            "Emily Watson",
            "UX Designer",
            "Applied 2024-01-13 · Remote",
            RecordStatus::Hired,
        ),
        record(
            "David Kim",
            "Product Manager",
            "Applied 2024-01-12 · Seattle, WA",
            RecordStatus::Interview,
        ),
    ]
}

fn mentor_sessions() -> Vec<RecordSummary> {
    vec![
        record(
            "Priya Sharma",
            "Frontend career planning",
            "Tomorrow · Video call",
            RecordStatus::Scheduled,
        ),
        record(
            "Jordan Lee",
            "Mock technical interview",
            "Friday · Video call",
            RecordStatus::Scheduled,
        ),
        record(
            "Ana Costa",
            "Resume review",
            "Last week · Chat",
            RecordStatus::Completed,
        ),
    ]
}

fn employee_applications() -> Vec<RecordSummary> {
    vec![
        record(
            "Sarah Chen",
            "Senior Full Stack Developer",
            "Applied 2024-01-15",
            RecordStatus::Interview,
        ),
        record(
            "Marcus Rodriguez",
            "DevOps Engineer",
            "Applied 2024-01-14",
            RecordStatus::Pending,
        ),
    ]
}

fn admin_jobs() -> Vec<RecordSummary> {
    vec![
        record(
            "Software Engineer",
            "TechCorp Inc",
            "25 applications · $80,000 - $120,000",
            RecordStatus::Active,
        ),
        record(
            "Product Manager",
            "TechCorp Inc",
            "15 applications · $90,000 - $130,000",
            RecordStatus::Active,
        ),
        record(
            "UX Designer",
            "HealthPlus Medical",
            "18 applications · $70,000 - $100,000",
            RecordStatus::Active,
        ),
        record(
            "Data Scientist",
            "EduTech Solutions",
            "32 applications · $95,000 - $140,000",
            RecordStatus::Active,
        ),
    ]
}
