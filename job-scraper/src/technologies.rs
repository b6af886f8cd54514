//! Technologies tracked in job listings, grouped by category.
//! Matching treats the whole vocabulary as one flat list of exact-case keywords.
use lazy_static::lazy_static;
use std::collections::BTreeSet;

pub const PYTHON_TECHNOLOGIES: &[&str] = &[
    "Python", "Django", "Flask", "FastAPI", "Pyramid", "Tornado", "Bottle", "CherryPy", "aiohttp",
    "asyncio", "uvicorn", "gunicorn", "WSGI", "ASGI",
];

pub const DATA_TECHNOLOGIES: &[&str] = &[
    "Pandas",
    "NumPy",
    "SciPy",
    "Matplotlib",
    "Seaborn",
    "Plotly",
    "Jupyter",
    "Scikit-learn",
    "TensorFlow",
    "PyTorch",
    "Keras",
    "NLTK",
    "SpaCy",
    "Dask",
    "PySpark",
    "Apache Spark",
    "Hadoop",
];

pub const DATABASE_TECHNOLOGIES: &[&str] = &[
    "SQL",
    "PostgreSQL",
    "MySQL",
    "SQLite",
    "MongoDB",
    "Redis",
    "Elasticsearch",
    "Cassandra",
    "DynamoDB",
    "SQLAlchemy",
    "Alembic",
    "Django ORM",
    "Prisma",
];

pub const WEB_TECHNOLOGIES: &[&str] = &[
    "HTML",
    "CSS",
    "JavaScript",
    "TypeScript",
    "React",
    "Vue",
    "Angular",
    "jQuery",
    "Bootstrap",
    "Tailwind",
    "REST",
    "RESTful",
    "GraphQL",
    "API",
];

pub const DEVOPS_TECHNOLOGIES: &[&str] = &[
    "Docker",
    "Kubernetes",
    "AWS",
    "Azure",
    "GCP",
    "Terraform",
    "Ansible",
    "Jenkins",
    "CI/CD",
    "Git",
    "GitHub",
    "GitLab",
    "Bitbucket",
    "Linux",
    "Nginx",
    "Apache",
];

pub const TESTING_TECHNOLOGIES: &[&str] = &[
    "Pytest",
    "Unittest",
    "Selenium",
    "Cypress",
    "Playwright",
    "Behave",
    "Robot Framework",
    "Mock",
    "TDD",
];

pub const MESSAGING_TECHNOLOGIES: &[&str] = &[
    "RabbitMQ",
    "Kafka",
    "Celery",
    "Redis Queue",
    "ZeroMQ",
    "gRPC",
    "WebSockets",
];

/// Named groups, used for reporting only
pub const TECHNOLOGY_CATEGORIES: [(&str, &[&str]); 7] = [
    ("Python", PYTHON_TECHNOLOGIES),
    ("Data", DATA_TECHNOLOGIES),
    ("Database", DATABASE_TECHNOLOGIES),
    ("Web", WEB_TECHNOLOGIES),
    ("DevOps", DEVOPS_TECHNOLOGIES),
    ("Testing", TESTING_TECHNOLOGIES),
    ("Messaging", MESSAGING_TECHNOLOGIES),
];

lazy_static! {
    pub static ref ALL_TECHNOLOGIES: Vec<&'static str> = TECHNOLOGY_CATEGORIES
        .iter()
        .flat_map(|(_, technologies)| technologies.iter().copied())
        .collect();
}

/// Every keyword of `vocabulary` that occurs verbatim (case-sensitive) in `text`
pub fn tag_technologies(text: &str, vocabulary: &[&str]) -> BTreeSet<String> {
    vocabulary
        .iter()
        .filter(|keyword| text.contains(**keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}

/// Category a keyword belongs to, first match in category order
pub fn category_of(technology: &str) -> Option<&'static str> {
    TECHNOLOGY_CATEGORIES
        .iter()
        .find(|(_, technologies)| technologies.iter().any(|t| *t == technology))
        .map(|(name, _)| *name)
}
