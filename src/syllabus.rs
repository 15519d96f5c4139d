// Static syllabus and exam configuration. Pure lookup tables; the selection
// and filtering code takes these as inputs and never reads them directly.

/// Questions drawn for one study session (fewer if the pool is smaller).
pub const STUDY_SESSION_SIZE: usize = 10;

/// Exam timer, owned by the host: 3 hours.
pub const EXAM_DURATION_SECS: u64 = 10_800;

/// Exam content domains used for stratified sampling and error reporting.
pub const DOMAINS: [u32; 4] = [1, 2, 3, 4];

pub fn domain_name(domain: u32) -> &'static str {
    match domain {
        1 => "Fundamentals",
        2 => "Predictive",
        3 => "Agile",
        4 => "Business Analysis",
        _ => "Unknown",
    }
}

const FOUNDATIONS_MODULES: &[&str] = &[
    "Module 1: Introduction to Project Management",
    "Module 2: The Role of a Project Manager",
    "Module 3: The Project Management Life Cycle and Methodologies",
    "Module 4: Organizational Influences and Project Management",
];

const GOOGLE_PM_MODULES: &[&str] = &[
    "Course 1: Foundations of Project Management",
    "Course 2: Project Initiation: Starting a Successful Project",
    "Course 3: Project Planning: Putting It All Together",
    "Course 4: Project Execution: Running the Project",
    "Course 5: Agile Project Management",
    "Course 6: Capstone: Applying Project Management in the Real World",
    "Course 7: Career Planning and Preparation",
];

const AGILE_MODULES: &[&str] = &[
    "Module 1: Introduction to Agile Project Management and Scrum Theory",
    "Module 2: Pillars of Scrum and Scrum Team Roles",
    "Module 3: Building and Managing the Product Backlog and Scrum Events",
    "Module 4: Implementing Agile Strategies and Coaching Agile Teams",
];

const CAPSTONE_MODULES: &[&str] = &[
    "Module 1: Analyzing Project Requirements and Creating a Project Charter",
    "Module 2: Developing a Project Plan",
    "Module 3: Managing Quality and Facilitating Retrospectives",
    "Module 4: Communicating Project Impact and Preparing for Job Interviews",
];

/// Ordered module titles for a program, used to populate range pickers.
pub fn module_titles(program: u32) -> Option<&'static [&'static str]> {
    match program {
        1 => Some(FOUNDATIONS_MODULES),
        2 => Some(GOOGLE_PM_MODULES),
        3 => Some(AGILE_MODULES),
        4 => Some(CAPSTONE_MODULES),
        _ => None,
    }
}

pub fn module_count(program: u32) -> Option<u32> {
    module_titles(program).map(|titles| titles.len() as u32)
}

/// Per-domain question quotas for the CAPM-style exam, 150 total.
const CAPM_EXAM_QUOTAS: &[(u32, usize)] = &[(1, 54), (2, 26), (3, 30), (4, 40)];

/// Domain quotas for a program's exam, in increasing domain order.
/// `None` for programs without a timed exam.
pub fn exam_quotas(program: u32) -> Option<&'static [(u32, usize)]> {
    (program == 2).then_some(CAPM_EXAM_QUOTAS)
}

/// Total exam size for a program (the sum of its domain quotas).
pub fn exam_total(program: u32) -> Option<usize> {
    exam_quotas(program).map(|quotas| quotas.iter().map(|&(_, count)| count).sum())
}
