/// Built-in job descriptions users can load to try the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleJob {
    #[default]
    PythonDeveloper,
    DataScientist,
    FrontendDeveloper,
}

impl SampleJob {
    pub const ALL: [SampleJob; 3] = [
        SampleJob::PythonDeveloper,
        SampleJob::DataScientist,
        SampleJob::FrontendDeveloper,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SampleJob::PythonDeveloper => "Senior Python Developer",
            SampleJob::DataScientist => "Data Scientist",
            SampleJob::FrontendDeveloper => "Frontend Developer",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            SampleJob::PythonDeveloper => PYTHON_DEVELOPER,
            SampleJob::DataScientist => DATA_SCIENTIST,
            SampleJob::FrontendDeveloper => FRONTEND_DEVELOPER,
        }
    }
}

const PYTHON_DEVELOPER: &str = "Senior Python Developer

We are seeking an experienced Python developer to join our growing engineering team.

Requirements:
• 3+ years of Python development experience
• Strong experience with Django or Flask frameworks
• Proficiency in SQL databases (PostgreSQL, MySQL)
• Experience with RESTful API development
• Knowledge of Git version control
• Understanding of software development best practices
• Bachelor's degree in Computer Science or related field

Preferred Qualifications:
• Experience with AWS cloud services
• Knowledge of Docker and containerization
• Familiarity with React or Vue.js
• Experience with data analysis libraries (pandas, numpy)
• Understanding of machine learning concepts
• Agile/Scrum methodology experience

Responsibilities:
• Develop and maintain web applications using Python
• Design and implement RESTful APIs
• Collaborate with frontend developers and designers
• Write clean, maintainable, and well-documented code
• Participate in code reviews and technical discussions
• Troubleshoot and debug applications";

const DATA_SCIENTIST: &str = "We are seeking a skilled Data Scientist to join our team. The ideal candidate should have:

Key Requirements:
• Master's or PhD in Data Science, Statistics, Computer Science, or related field
• 3+ years of experience in data analysis and machine learning
• Proficiency in Python, R, SQL, and statistical modeling
• Experience with machine learning frameworks (scikit-learn, TensorFlow, PyTorch)
• Strong knowledge of data visualization tools (Matplotlib, Seaborn, Plotly)
• Experience with big data technologies (Spark, Hadoop)
• Knowledge of cloud platforms (AWS, GCP, Azure)
• Strong communication and problem-solving skills

Responsibilities:
• Develop and implement machine learning models
• Analyze large datasets to extract actionable insights
• Create data visualizations and reports
• Collaborate with cross-functional teams
• Deploy models to production environments";

const FRONTEND_DEVELOPER: &str = "We are looking for a talented Frontend Developer to create amazing user experiences. Requirements:

Key Requirements:
• Bachelor's degree in Computer Science or related field
• 2+ years of frontend development experience
• Proficiency in HTML5, CSS3, JavaScript (ES6+)
• Experience with modern frameworks (React, Vue.js, Angular)
• Knowledge of responsive design and mobile-first development
• Familiarity with CSS preprocessors (Sass, Less)
• Experience with version control (Git)
• Understanding of web performance optimization
• Knowledge of testing frameworks (Jest, Cypress)

Responsibilities:
• Develop responsive web applications
• Implement user interface designs
• Optimize applications for maximum speed
• Collaborate with backend developers and designers
• Ensure cross-browser compatibility";
