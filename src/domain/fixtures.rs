use crate::entities::{
    certification::NewCertification,
    experience::NewExperience,
    project::NewProject,
    skill::NewSkill,
};

/// Hand-authored content inserted into an empty store so the site always
/// has something to render.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    pub projects: Vec<NewProject>,
    pub skills: Vec<NewSkill>,
    pub experience: Vec<NewExperience>,
    pub certifications: Vec<NewCertification>,
}

impl FixtureSet {
    pub fn portfolio() -> Self {
        FixtureSet {
            projects: projects(),
            skills: skills(),
            experience: experience(),
            certifications: certifications(),
        }
    }
}

impl Default for FixtureSet {
    fn default() -> Self {
        Self::portfolio()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn projects() -> Vec<NewProject> {
    vec![
        NewProject {
            title: "RAG Document Chatbot".into(),
            description: "A retrieval-augmented generation system allowing users to chat with their PDF documents using OpenAI and LangChain.".into(),
            tech_stack: strings(&["Python", "LangChain", "OpenAI", "React", "Vector DB"]),
            repo_url: Some("https://github.com/username/rag-chatbot".into()),
            demo_url: Some("https://rag-demo.com".into()),
            image_url: "https://images.unsplash.com/photo-1531746790731-6c087fecd65a?w=800&q=80".into(),
            highlights: Some(strings(&[
                "Chunked and embedded 10k+ pages with overlap-aware splitting",
                "Cited source passages inline with every answer",
                "Streamed responses token by token to the browser",
            ])),
        },
        NewProject {
            title: "Stable Diffusion Art Gen".into(),
            description: "Custom interface for Stable Diffusion models with fine-tuned LoRAs for specific artistic styles.".into(),
            tech_stack: strings(&["PyTorch", "Stable Diffusion", "Python", "Gradio"]),
            repo_url: Some("https://github.com/username/sd-art".into()),
            demo_url: Some("#".into()),
            image_url: "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?w=800&q=80".into(),
            highlights: Some(strings(&[
                "Trained style LoRAs on curated datasets of under 200 images",
                "Added prompt presets and seed pinning for reproducible output",
            ])),
        },
        NewProject {
            title: "CodeLlama Assistant".into(),
            description: "A coding assistant fine-tuned on specialized Python libraries to help with data science workflows.".into(),
            tech_stack: strings(&["Llama 2", "Hugging Face", "Python", "Fine-tuning"]),
            repo_url: Some("https://github.com/username/codellama-finetune".into()),
            demo_url: Some("#".into()),
            image_url: "https://images.unsplash.com/photo-1555949963-aa79dcee981c?w=800&q=80".into(),
            highlights: None,
        },
        NewProject {
            title: "Voice-to-Action Agent".into(),
            description: "An AI agent that converts voice commands into executable system actions using Whisper and GPT-4.".into(),
            tech_stack: strings(&["Whisper API", "GPT-4", "Node.js", "WebSockets"]),
            repo_url: Some("https://github.com/username/voice-agent".into()),
            demo_url: Some("#".into()),
            image_url: "https://images.unsplash.com/photo-1589254065878-42c9da9e2f58?w=800&q=80".into(),
            highlights: Some(strings(&[
                "Transcribed and dispatched commands in under a second",
                "Confirmed destructive actions before running them",
            ])),
        },
    ]
}

fn skill(name: &str, category: &str, proficiency: i32) -> NewSkill {
    NewSkill {
        name: name.into(),
        category: category.into(),
        proficiency,
    }
}

fn skills() -> Vec<NewSkill> {
    vec![
        skill("Python", "Languages", 95),
        skill("TypeScript", "Languages", 85),
        skill("SQL", "Languages", 80),

        skill("PyTorch", "AI / ML", 90),
        skill("TensorFlow", "AI / ML", 75),
        skill("LangChain", "AI / ML", 95),
        skill("Hugging Face", "AI / ML", 85),
        skill("OpenAI API", "AI / ML", 95),

        skill("React", "Frontend", 85),
        skill("Tailwind CSS", "Frontend", 90),
        skill("Next.js", "Frontend", 80),

        skill("Docker", "Tools", 75),
        skill("Git", "Tools", 90),
        skill("AWS", "Tools", 70),
    ]
}

fn experience() -> Vec<NewExperience> {
    vec![
        NewExperience {
            company: "Nimbus Labs".into(),
            role: "Machine Learning Engineer".into(),
            location: Some("Bengaluru, India".into()),
            period: "2023 - Present".into(),
            description: strings(&[
                "Built retrieval pipelines serving internal knowledge search",
                "Cut inference cost by 40% with batching and quantized models",
                "Mentored two interns through their first production launches",
            ]),
        },
        NewExperience {
            company: "Quanta Analytics".into(),
            role: "Software Engineer".into(),
            location: None,
            period: "2021 - 2023".into(),
            description: strings(&[
                "Maintained the customer-facing dashboard in React and TypeScript",
                "Moved nightly ETL jobs from cron scripts to Airflow",
            ]),
        },
    ]
}

fn certifications() -> Vec<NewCertification> {
    vec![
        NewCertification {
            name: "AWS Certified Machine Learning - Specialty".into(),
            issuer: "Amazon Web Services".into(),
            verification_url: Some("https://www.credly.com/badges/example-aws-ml".into()),
        },
        NewCertification {
            name: "Deep Learning Specialization".into(),
            issuer: "DeepLearning.AI".into(),
            verification_url: Some("https://www.coursera.org/account/accomplishments/specialization/example".into()),
        },
        NewCertification {
            name: "TensorFlow Developer Certificate".into(),
            issuer: "Google".into(),
            verification_url: None,
        },
    ]
}
