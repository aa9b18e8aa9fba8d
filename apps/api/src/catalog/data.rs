//! Literal catalog tables. Data only — presentation (glyphs, colors) is
//! derived in the pages layer, keyed by id or status tag.

use super::{
    Artifact, ArtifactCategory, ArtifactStatus, CareerPath, DocLink, MemberProject, MemberStat,
    RoadmapEntry, RoadmapStatus, SocialLinks, TeamMember,
};

fn doc(name: &str, url: &str) -> DocLink {
    DocLink {
        name: name.to_string(),
        url: url.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn career_paths() -> Vec<CareerPath> {
    vec![
        CareerPath {
            id: "ai-alchemist".to_string(),
            title: "AI Alchemist".to_string(),
            tagline: "Transform data into wisdom".to_string(),
            description: "Forging synthetic minds. You train models, fine-tune LLMs, and \
                          experiment with the unknown."
                .to_string(),
            focus: strings(&[
                "Model training and fine-tuning",
                "Large Language Models",
                "RAG systems",
                "Autonomous AI agents",
            ]),
            tech_stack: strings(&["PyTorch", "LLMs", "RAG", "Agents"]),
            core_docs: vec![
                doc("PyTorch", "https://pytorch.org/docs"),
                doc("Hugging Face", "https://huggingface.co/docs"),
                doc("LangChain", "https://python.langchain.com/docs"),
                doc("Papers With Code", "https://paperswithcode.com"),
            ],
        },
        CareerPath {
            id: "frontend-architect".to_string(),
            title: "Frontend Architect".to_string(),
            tagline: "Craft the portals of the Order".to_string(),
            description: "Constructing the visual interface of the Order. You build \
                          high-performance portals."
                .to_string(),
            focus: strings(&[
                "React and modern frameworks",
                "WebGL and 3D experiences",
                "UI/UX design principles",
                "Performance optimization",
            ]),
            tech_stack: strings(&["React", "WebGL", "Three.js", "UI/UX"]),
            core_docs: vec![
                doc("React", "https://react.dev"),
                doc("Three.js", "https://threejs.org/docs"),
                doc("MDN", "https://developer.mozilla.org"),
                doc("web.dev", "https://web.dev"),
            ],
        },
        CareerPath {
            id: "devops-warden".to_string(),
            title: "DevOps Warden".to_string(),
            tagline: "Guard the sacred pipelines".to_string(),
            description: "Keeper of the infrastructure. You ensure our systems never fall to \
                          the void."
                .to_string(),
            focus: strings(&[
                "Docker containerization",
                "Kubernetes orchestration",
                "CI/CD pipelines and automation",
                "Infrastructure as Code",
                "Monitoring and observability",
            ]),
            tech_stack: strings(&["Docker", "K8s", "AWS", "CI/CD"]),
            core_docs: vec![
                doc("Docker", "https://docs.docker.com"),
                doc("Kubernetes", "https://kubernetes.io/docs"),
                doc("AWS", "https://docs.aws.amazon.com"),
                doc("Terraform", "https://developer.hashicorp.com/terraform"),
            ],
        },
        CareerPath {
            id: "robotics-engineer".to_string(),
            title: "Robotics Engineer".to_string(),
            tagline: "Give the machine spirit a body".to_string(),
            description: "Bridging the digital and physical. You give the machine spirit a body."
                .to_string(),
            focus: strings(&[
                "ROS fundamentals",
                "Embedded systems programming",
                "Sensor integration",
                "Control systems and autonomy",
            ]),
            tech_stack: strings(&["ROS", "Embedded", "C++", "Sensors"]),
            core_docs: vec![
                doc("ROS", "https://docs.ros.org"),
                doc("Arduino", "https://docs.arduino.cc"),
                doc("C++ Reference", "https://en.cppreference.com"),
                doc("Raspberry Pi", "https://www.raspberrypi.com/documentation"),
            ],
        },
        CareerPath {
            id: "mobile-sorcerer".to_string(),
            title: "Mobile Sorcerer".to_string(),
            tagline: "Conjure apps that live in pockets".to_string(),
            description: "Wielding Flutter and Android to conjure apps that live in pockets \
                          worldwide."
                .to_string(),
            focus: strings(&[
                "Flutter cross-platform apps",
                "Native Android integration",
                "State management",
                "On-device machine learning",
            ]),
            tech_stack: strings(&["Flutter", "Dart", "Android", "Kotlin"]),
            core_docs: vec![
                doc("Flutter", "https://docs.flutter.dev"),
                doc("Dart", "https://dart.dev/guides"),
                doc("Android", "https://developer.android.com/docs"),
                doc("Kotlin", "https://kotlinlang.org/docs"),
            ],
        },
    ]
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: "nitesh-badgujar".to_string(),
            name: "Nitesh Badgujar".to_string(),
            role: "Founder & AIML Lead".to_string(),
            codename: "THE_SHADEMASTER".to_string(),
            summary: "Driving NightShade's vision. Building intelligent systems with AI, ML, \
                      and Generative models."
                .to_string(),
            bio: "Nitesh is an AIML and Generative AI enthusiast focused on building \
                  practical, future-ready systems. Starting as a curious learner exploring \
                  machine learning fundamentals, he quickly moved toward hands-on \
                  experimentation with AI models, system design, and product thinking. As the \
                  founder and lead of NightShade, Nitesh defines the technical direction of \
                  the team—bridging intelligence, automation, and dark-themed innovation. His \
                  philosophy: 'AI is not magic, but in the right hands, it feels like it.'"
                .to_string(),
            skills: strings(&[
                "Machine Learning",
                "Deep Learning",
                "Generative AI",
                "Python",
                "Data Structures",
                "Model Building",
                "AI System Design",
            ]),
            projects: vec![
                MemberProject {
                    name: "NightShade Core".to_string(),
                    description: "Foundation systems powering NightShade projects and \
                                  experiments"
                        .to_string(),
                },
                MemberProject {
                    name: "Echo Chamber".to_string(),
                    description: "AI-powered conversational system with dark-tech personality"
                        .to_string(),
                },
                MemberProject {
                    name: "Image Super-Resolution AI".to_string(),
                    description: "Enhancing low-quality images using deep learning models \
                                  (SRGAN / ESRGAN)"
                        .to_string(),
                },
            ],
            stats: vec![
                MemberStat {
                    label: "AI Models Built".to_string(),
                    value: "15+".to_string(),
                },
                MemberStat {
                    label: "Projects Led".to_string(),
                    value: "10+".to_string(),
                },
                MemberStat {
                    label: "Active Experiments".to_string(),
                    value: "Always".to_string(),
                },
            ],
            location: "India".to_string(),
            joined: "2024".to_string(),
            email: "niteshbadgujar32@gmail.com".to_string(),
            socials: SocialLinks {
                github: Some("https://github.com/NiteshBadgujar".to_string()),
                twitter: Some("https://x.com/NiteshBadg15562".to_string()),
                linkedin: Some(
                    "https://www.linkedin.com/in/nitesh-badgujar-8a5218329/".to_string(),
                ),
            },
        },
        TeamMember {
            id: "atharva-jangale".to_string(),
            name: "Atharva Jangale".to_string(),
            role: "Moderator & Core Member".to_string(),
            codename: "THE_CATALYST".to_string(),
            summary: "Driving momentum, aligning people with purpose, and turning ideas into \
                      execution."
                .to_string(),
            bio: "Atharva is a Computer Science engineering student with a strong passion for \
                  building meaningful tech and communities that actually ship. Known for \
                  bridging the gap between complex tech and real people, he plays a key role \
                  in shaping NightShade's culture, collaboration, and execution. From \
                  hackathons and workshops to AI-powered projects and modern web stacks, \
                  Atharva thrives at the intersection of leadership, learning, and action. \
                  His approach is simple: learn fast, build smarter, and help others level up \
                  along the way."
                .to_string(),
            skills: strings(&[
                "Community Leadership",
                "Web Development",
                "Next.js",
                "React",
                "Firebase",
                "AI Tooling",
                "Git & GitHub",
                "Cloud Fundamentals",
                "System Thinking",
            ]),
            projects: vec![
                MemberProject {
                    name: "NightShade Community".to_string(),
                    description: "Building a focused, high-signal tech community driven by \
                                  learning and execution"
                        .to_string(),
                },
                MemberProject {
                    name: "AI Resume Generator".to_string(),
                    description: "Hackathon project focused on AI-driven personalization and \
                                  usability"
                        .to_string(),
                },
                MemberProject {
                    name: "TripTuner".to_string(),
                    description: "AI-powered personalized travel itinerary generator"
                        .to_string(),
                },
            ],
            stats: vec![
                MemberStat {
                    label: "Events Organized".to_string(),
                    value: "10+".to_string(),
                },
                MemberStat {
                    label: "Projects Led".to_string(),
                    value: "8+".to_string(),
                },
                MemberStat {
                    label: "Community Members Impacted".to_string(),
                    value: "200+".to_string(),
                },
            ],
            location: "India".to_string(),
            joined: "2024".to_string(),
            email: "atharvajangale778@gmail.com".to_string(),
            socials: SocialLinks {
                github: Some("https://github.com/atharvajangale".to_string()),
                twitter: Some("https://twitter.com/atharvajangale".to_string()),
                linkedin: Some("https://linkedin.com/in/atharvajangale".to_string()),
            },
        },
        TeamMember {
            id: "om-satote".to_string(),
            name: "Om Satote".to_string(),
            role: "Full Stack Web Developer".to_string(),
            codename: "DEVILLUCIFER".to_string(),
            summary: "Building intelligent, scalable web solutions powered by modern tech and \
                      AI."
                .to_string(),
            bio: "Om Satote is a full stack web developer with a strong interest in building \
                  modern web applications, AI-powered systems, and innovative tech solutions. \
                  With hands-on experience across frontend technologies and exposure to \
                  backend, AI, and hardware-integrated projects, Om focuses on creating \
                  impactful, real-world applications. Driven by curiosity and continuous \
                  learning, Om blends creativity with technical skill to turn ideas into \
                  functional digital products."
                .to_string(),
            skills: strings(&[
                "HTML",
                "CSS",
                "JavaScript",
                "React",
                "GitHub",
                "Python",
                "Java",
                "C / C++",
                "Full Stack Web Development",
            ]),
            projects: vec![
                MemberProject {
                    name: "Kisan Scheme App".to_string(),
                    description: "A web platform designed to help farmers easily access and \
                                  understand government schemes."
                        .to_string(),
                },
                MemberProject {
                    name: "AI-Powered Resume Builder with ATS System".to_string(),
                    description: "An intelligent resume builder that creates ATS-friendly \
                                  resumes using AI-based analysis."
                        .to_string(),
                },
                MemberProject {
                    name: "SonicLink Music App".to_string(),
                    description: "A responsive music streaming application with playlist \
                                  management and modern UI."
                        .to_string(),
                },
                MemberProject {
                    name: "Cabin Automation System".to_string(),
                    description: "An automation project enabling smart control of cabin \
                                  appliances using hardware and sensors."
                        .to_string(),
                },
                MemberProject {
                    name: "Human Following Robot".to_string(),
                    description: "A robotics system capable of detecting and following humans \
                                  using sensors and vision logic."
                        .to_string(),
                },
            ],
            stats: vec![
                MemberStat {
                    label: "Major Projects".to_string(),
                    value: "7+".to_string(),
                },
                MemberStat {
                    label: "Core Focus".to_string(),
                    value: "Full Stack & AI".to_string(),
                },
                MemberStat {
                    label: "Tech Domains".to_string(),
                    value: "Web, AI, Robotics".to_string(),
                },
            ],
            location: "Nashik".to_string(),
            joined: "2025".to_string(),
            email: "omsatote142005@gmail.com".to_string(),
            socials: SocialLinks {
                github: Some("https://github.com/omsatote".to_string()),
                twitter: None,
                linkedin: Some("https://www.linkedin.com/in/om-satote-a7aa6a325/".to_string()),
            },
        },
        TeamMember {
            id: "elara-x".to_string(),
            name: "Elara X.".to_string(),
            role: "Hardware Interface".to_string(),
            codename: "SIGNAL_MASTER".to_string(),
            summary: "Bridging the gap between digital code and physical reality. Robotics \
                      and IoT."
                .to_string(),
            bio: "Elara is where the digital meets the physical. With a background in \
                  electrical engineering and embedded systems, they've designed everything \
                  from custom PCBs to full robotic systems. At NightShade, Elara leads our \
                  hardware initiatives, creating the physical manifestations of our digital \
                  dreams. Their belief: 'Software is the soul, but hardware is the body that \
                  lets it interact with the world.'"
                .to_string(),
            skills: strings(&[
                "Embedded Systems",
                "PCB Design",
                "Robotics",
                "IoT",
                "C/C++",
                "FPGA",
                "Signal Processing",
            ]),
            projects: vec![
                MemberProject {
                    name: "Sentinel Array".to_string(),
                    description: "Distributed sensor network for environmental monitoring"
                        .to_string(),
                },
                MemberProject {
                    name: "Automaton Core".to_string(),
                    description: "Modular robotics platform for rapid prototyping".to_string(),
                },
                MemberProject {
                    name: "Signal Bridge".to_string(),
                    description: "Universal IoT gateway with edge computing capabilities"
                        .to_string(),
                },
            ],
            stats: vec![
                MemberStat {
                    label: "Devices Built".to_string(),
                    value: "234".to_string(),
                },
                MemberStat {
                    label: "PCBs Designed".to_string(),
                    value: "89".to_string(),
                },
                MemberStat {
                    label: "Robots Active".to_string(),
                    value: "12".to_string(),
                },
            ],
            location: "The Workshop".to_string(),
            joined: "2022".to_string(),
            email: "signal@nightshade.dev".to_string(),
            socials: SocialLinks {
                github: Some("https://github.com/signalmaster".to_string()),
                twitter: Some("https://twitter.com/signalmaster".to_string()),
                linkedin: Some("https://linkedin.com/in/signalmaster".to_string()),
            },
        },
        TeamMember {
            id: "atharva-k".to_string(),
            name: "Atharva Kale".to_string(),
            role: "Flutter & Android Developer".to_string(),
            codename: "CODE_REACTIVE".to_string(),
            summary: "Building seamless cross-platform interfaces with integrated machine \
                      learning capabilities."
                .to_string(),
            bio: "Atharva is a developer focused on the Flutter ecosystem and native Android \
                  integration. He specializes in creating responsive user interfaces that \
                  don't just look good, but perform complex tasks like on-device image \
                  processing and real-time data syncing. By combining Dart with his \
                  background in Computer Vision, he builds mobile apps that are intelligent, \
                  fast, and scalable."
                .to_string(),
            skills: strings(&[
                "Flutter",
                "Dart",
                "Android Studio",
                "Firebase",
                "SQLite",
                "TFLite",
                "Git/GitHub",
                "Provider/Riverpod",
            ]),
            projects: vec![
                MemberProject {
                    name: "SmileScan App".to_string(),
                    description: "Mobile diagnostic tool built with Flutter and TensorFlow \
                                  Lite for automated dental analysis."
                        .to_string(),
                },
                MemberProject {
                    name: "Biometric Portal".to_string(),
                    description: "Secure Android implementation of face-recognition auth \
                                  using custom Flutter MethodChannels."
                        .to_string(),
                },
                MemberProject {
                    name: "HCI Mobile Suite".to_string(),
                    description: "Experimenting with MediaPipe integration in Flutter for \
                                  gesture-based app navigation."
                        .to_string(),
                },
            ],
            stats: vec![
                MemberStat {
                    label: "Builds Shipped".to_string(),
                    value: "15+".to_string(),
                },
                MemberStat {
                    label: "Crash-Free Rate".to_string(),
                    value: "99%".to_string(),
                },
                MemberStat {
                    label: "Avg. Frame Rate".to_string(),
                    value: "60fps".to_string(),
                },
            ],
            location: "Pune, India".to_string(),
            joined: "2024".to_string(),
            email: "atharvakale31@gmail.com".to_string(),
            socials: SocialLinks {
                github: Some("https://github.com/Atharvakale11".to_string()),
                twitter: None,
                linkedin: Some(
                    "https://www.linkedin.com/in/atharva-kale-411980374".to_string(),
                ),
            },
        },
    ]
}

pub fn roadmap() -> Vec<RoadmapEntry> {
    let entry = |era: &str, title: &str, description: &str, status| RoadmapEntry {
        era: era.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status,
    };

    vec![
        entry(
            "Q4 2024",
            "The Awakening",
            "The idea of NightShade was conceived. Core members united under a single \
             vision. Dark-tech identity, manifesto, and long-term direction defined.",
            RoadmapStatus::Fulfilled,
        ),
        entry(
            "Q1 2025",
            "First Manifestation",
            "NightShade takes form as a focused tech team. Website groundwork initiated. \
             Early experiments in AI, frontend systems, DevOps, and robotics begin.",
            RoadmapStatus::InProgress,
        ),
        entry(
            "Q3 2025",
            "The Shadow Forge",
            "Internal systems designed. Project-based collaboration becomes the core \
             workflow. Selective recruitment of Initiates through skills, not hype.",
            RoadmapStatus::Prophesied,
        ),
        entry(
            "2026",
            "Ascension Phase",
            "Public release of first major intelligent artifacts. AI-driven systems move \
             from experiments to usable products. NightShade establishes itself as a \
             serious dark-tech collective.",
            RoadmapStatus::Prophesied,
        ),
        entry(
            "Beyond",
            "The Unknown",
            "Autonomous systems. Decentralized collaboration. Projects that operate beyond \
             a single team or location.",
            RoadmapStatus::Prophesied,
        ),
    ]
}

pub fn artifacts() -> Vec<Artifact> {
    vec![
        Artifact {
            id: "1".to_string(),
            title: "Echo_Chamber".to_string(),
            category: ArtifactCategory::LivingDemo,
            status: ArtifactStatus::Deployed,
            description: "An AI chatbot trained specifically on NightShade ideology and \
                          manifesto texts. It does not answer; it preaches."
                .to_string(),
        },
        Artifact {
            id: "2".to_string(),
            title: "Project: Chimera".to_string(),
            category: ArtifactCategory::System,
            status: ArtifactStatus::InDevelopment,
            description: "A multi-agent autonomous trading swarm designed to predict market \
                          anomalies using sentiment analysis from dark web forums."
                .to_string(),
        },
        Artifact {
            id: "3".to_string(),
            title: "Vision_Zero".to_string(),
            category: ArtifactCategory::Research,
            status: ArtifactStatus::FailedExperiment,
            description: "Attempted image super-resolution using recursive fractals. \
                          Resulted in data corruption. Valuable lessons in entropy gained."
                .to_string(),
        },
    ]
}
