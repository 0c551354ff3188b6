// ABOUTME: The literal slide script for the Agentic Testing Framework pitch deck
// ABOUTME: All text, numbers, positions and colours of the 19 slides live here

use crate::model::{
    ColumnLayout, ContentSlide, Deck, DiagramShape, DiagramSlide, Geometry, Label, Metric,
    MetricSlide, Outline, Slide, TableSlide, TitleSlide, TitleStyle,
};
use crate::style::{palette, Frame, Rgb};

/// Default file name of the generated deck.
pub const OUTPUT_FILE_NAME: &str = "Agentic_Testing_Framework_Pitch_Deck.pptx";

/// Build the full pitch deck.
pub fn pitch_deck() -> Deck {
    let mut deck = Deck::new();

    deck.push(Slide::Title(TitleSlide {
        title: "🚀 Agentic Testing Framework".to_string(),
        subtitle: "Transforming Health Insurance Testing with AI".to_string(),
        tagline: Some("Reducing Testing Costs by 80% While Improving Quality".to_string()),
        style: TitleStyle::Opening,
    }));

    deck.push(bullets(
        "💥 The Testing Crisis in Health Insurance",
        &[
            "Manual Testing Bottleneck: 60% of release cycle time ($2M+ annually)",
            "Complex Regulatory Requirements: HIPAA, ACA, State mandates ($500K+)",
            "Legacy System Integration: Mainframe, EDI, HL7 ($800K+)",
            "Production Defects: Customer impact, penalties ($1M+)",
            "Test Maintenance: 40% of QA time ($600K+)",
            "",
            "Reality: 20+ QA Engineers, 6-8 Week testing cycles",
            "30-40% of defects escape to production",
            "Total annual testing costs: $4.9M+",
        ],
    ));

    deck.push(bullets(
        "🎯 Imagine a World Where...",
        &[
            "✨ Testing is Autonomous - AI agents write, execute, and maintain tests",
            "🔮 Quality is Predictive - Defects caught before they're written",
            "✅ Compliance is Built-In - Regulatory requirements validated real-time",
            "💰 Costs are Minimal - 80% reduction in testing expenses",
            "⚡ Speed is Exponential - Hours instead of weeks for full regression",
        ],
    ));

    deck.push(bullets(
        "🤖 Agentic Testing Framework",
        &[
            "AI-Powered, Domain-Specific, Enterprise-Ready",
            "",
            "🧠 AI Orchestrator (GPT-4 / Claude / Custom Models)",
            "↓",
            "🎭 Specialized AI Agents:",
            "  • Policy Validation Agent",
            "  • Claims Processing Agent",
            "  • Member Journey Agent",
            "  • Integration Testing Agent",
            "  • Compliance & Security Agent",
            "↓",
            "🛠️ Testing Tools & Systems",
            "  • UI • API • Database • EDI • Compliance",
        ],
    ));

    deck.push(bullets(
        "⚙️ The Magic Behind the Scenes",
        &[
            "1️⃣ Intelligent Test Generation",
            "   Policy Document → AI Analysis → 1000+ Test Cases",
            "   (Manual: 2 weeks vs AI: 2 hours)",
            "",
            "2️⃣ Autonomous Execution",
            "   • Parallel execution across 100+ agents",
            "   • Self-healing when UI/API changes",
            "   • Real-time adaptation to failures",
            "",
            "3️⃣ Smart Validation",
            "   • Claims adjudication logic verification",
            "   • Regulatory compliance checks",
            "   • Cross-system integration validation",
            "",
            "4️⃣ Continuous Learning",
            "   • Learns from production issues",
            "   • Improves test coverage over time",
        ],
    ));

    deck.push(Slide::Content(ContentSlide {
        title: "🏥 Built for Health Insurance".to_string(),
        lines: lines(&[
            "Policy Management:",
            "  • Premium calculations • Eligibility rules",
            "  • Coverage limits • Renewal workflows",
            "",
            "Claims Processing:",
            "  • Adjudication logic • COB scenarios",
            "  • Pre-authorization • Payment accuracy",
            "",
            "Compliance:",
            "  • HIPAA validation • ACA requirements",
            "  • State mandates • Audit trails",
            "",
            "Integration:",
            "  • EDI (837, 835, 834, 270/271)",
            "  • HL7/FHIR • Provider networks • PBM systems",
        ]),
        columns: ColumnLayout::Two,
    }));

    deck.push(Slide::Table(TableSlide {
        title: "🏆 Why We Win".to_string(),
        headers: lines(&["Feature", "Manual", "Traditional", "Our Framework"]),
        rows: vec![
            lines(&["Speed", "6-8 weeks", "2-3 weeks", "2-3 days ✨"]),
            lines(&["Coverage", "40-50%", "60-70%", "90%+ ✨"]),
            lines(&["Maintenance", "High", "High", "Low ✨"]),
            lines(&["Domain Knowledge", "Manual", "Manual", "Built-in AI ✨"]),
            lines(&["Cost (3 years)", "$6M", "$3M", "$1.5M ✨"]),
            lines(&["Adaptability", "Medium", "Low", "High ✨"]),
        ],
    }));

    deck.push(metrics(
        "💰 The Numbers That Matter",
        &[
            ("145-217%", "Year 1 ROI"),
            ("$2.5M-$3.8M", "Annual Savings"),
            ("6-8 Months", "Payback Period"),
            ("80%", "Cost Reduction"),
        ],
    ));

    deck.push(bullets(
        "📈 Transformational Outcomes",
        &[
            "Efficiency Gains:",
            "  ⚡ 80% reduction in test creation time",
            "  🚀 70% reduction in test execution time",
            "  🔧 90% reduction in test maintenance",
            "  📊 3x increase in test coverage",
            "",
            "Quality Improvements:",
            "  🎯 95%+ defect detection in pre-production",
            "  📉 50% reduction in production defects",
            "  ✅ 98%+ test reliability",
            "  🔍 100% compliance validation",
            "",
            "Business Benefits:",
            "  💵 $2.5M+ annual cost savings",
            "  ⏱️ 30% faster time to market",
        ],
    ));

    deck.push(bullets(
        "🏢 Built for Large Insurance Companies",
        &[
            "Security & Compliance:",
            "  ✅ HIPAA compliant with PHI/PII protection",
            "  ✅ SOC 2 Type II certified",
            "  ✅ HITRUST CSF framework",
            "  ✅ Zero-trust architecture",
            "",
            "Scalability:",
            "  ✅ 10,000+ concurrent tests",
            "  ✅ Multi-region deployment",
            "  ✅ 99.9% uptime SLA",
            "",
            "Integration:",
            "  ✅ Legacy systems (Mainframe, AS/400)",
            "  ✅ Modern APIs (REST, GraphQL, gRPC)",
            "  ✅ Enterprise tools (JIRA, ServiceNow)",
        ],
    ));

    deck.push(bullets(
        "🗺️ 12-Month Journey to Success",
        &[
            "Phase 1: Foundation (Months 1-3)",
            "  • Core framework deployment",
            "  • 100+ automated tests",
            "  • Milestone: 50% reduction in manual testing",
            "",
            "Phase 2: Scale (Months 4-6)",
            "  • All 5 specialized agents",
            "  • 1,000+ automated tests",
            "  • Milestone: 70% test automation coverage",
            "",
            "Phase 3: Advanced (Months 7-9)",
            "  • AI-powered test generation",
            "  • 5,000+ automated tests",
            "  • Milestone: <1 hour regression",
            "",
            "Phase 4: Optimization (Months 10-12)",
            "  • Multi-region deployment",
            "  • Milestone: 80% automation, ROI positive",
        ],
    ));

    deck.push(metrics(
        "🌟 What Success Looks Like",
        &[
            ("90%+", "Test Coverage"),
            ("3 days", "Full Regression"),
            ("$2.1M", "Cost Savings"),
            ("40%", "Faster Releases"),
        ],
    ));

    deck.push(bullets(
        "💼 The Ask",
        &[
            "Pilot Program Investment: $250,000 (3 months)",
            "  • Framework setup: $100K",
            "  • 2 specialized agents: $80K",
            "  • Integration: $40K",
            "  • Training & support: $30K",
            "",
            "Expected Pilot Outcomes:",
            "  ✅ 100+ automated tests",
            "  ✅ 50% reduction in manual testing",
            "  ✅ Proof of ROI",
            "  ✅ Executive buy-in for full deployment",
            "",
            "Full Program: $1.15M - $1.75M (12 months)",
            "Expected Return: $2.5M - $3.8M annually",
            "ROI: 145% - 217% in Year 1",
        ],
    ));

    deck.push(bullets(
        "⏰ The Time is Now",
        &[
            "Market Trends:",
            "  📈 85% of enterprises investing in AI",
            "  🚀 60% cite testing as bottleneck",
            "  💰 Need to do more with less",
            "",
            "Competitive Pressure:",
            "  • Competitors exploring AI testing",
            "  • First movers gain significant advantage",
            "  • Technology gap widening rapidly",
            "",
            "Your Opportunity:",
            "  🎯 Be a pioneer in AI-powered testing",
            "  🏆 Gain competitive advantage",
            "  💡 Transform from cost center to innovation driver",
            "  🚀 Lead the industry in testing excellence",
        ],
    ));

    deck.push(bullets(
        "🎯 Let's Transform Testing Together",
        &[
            "Next Steps:",
            "",
            "1. Pilot Program (3 months) - $250K",
            "   • Select one product line",
            "   • Deploy core framework",
            "   • Demonstrate quick wins",
            "",
            "2. Business Case Approval (Month 4)",
            "   • Present results to executives",
            "   • Secure full budget",
            "",
            "3. Full Deployment (9 months) - $900K-$1.5M",
            "   • Phased rollout across products",
            "   • Scale to enterprise",
            "   • Achieve target ROI",
            "",
            "Decision Timeline: 4 weeks to pilot kickoff",
        ],
    ));

    deck.push(Slide::Diagram(system_architecture()));
    deck.push(Slide::Diagram(agent_architecture()));
    deck.push(Slide::Diagram(execution_flow()));

    deck.push(Slide::Title(TitleSlide {
        title: "🙏 Thank You".to_string(),
        subtitle: "Let's Revolutionize Health Insurance Testing Together".to_string(),
        tagline: None,
        style: TitleStyle::Closing,
    }));

    deck
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn bullets(title: &str, items: &[&str]) -> Slide {
    Slide::Content(ContentSlide {
        title: title.to_string(),
        lines: lines(items),
        columns: ColumnLayout::Single,
    })
}

fn metrics(title: &str, pairs: &[(&str, &str)]) -> Slide {
    Slide::Metric(MetricSlide {
        title: title.to_string(),
        metrics: pairs
            .iter()
            .map(|(value, label)| Metric {
                value: value.to_string(),
                label: label.to_string(),
            })
            .collect(),
    })
}

fn labelled(
    geometry: Geometry,
    frame: Frame,
    fill: Rgb,
    outline: Outline,
    text: &str,
    size: f64,
) -> DiagramShape {
    DiagramShape {
        geometry,
        frame,
        fill,
        outline,
        label: Some(Label {
            text: text.to_string(),
            size,
        }),
    }
}

fn connector(geometry: Geometry, frame: Frame) -> DiagramShape {
    DiagramShape {
        geometry,
        frame,
        fill: palette::CONNECTOR,
        outline: Outline {
            color: palette::CONNECTOR,
            width: None,
        },
        label: None,
    }
}

const WHITE_2PT: Outline = Outline {
    color: Rgb::WHITE,
    width: Some(2.0),
};

/// Five stacked layers joined by down arrows.
fn system_architecture() -> DiagramSlide {
    let layers = [
        ("User Interface & API Gateway", 1.5, Rgb(100, 181, 246)),
        ("Orchestration Layer (LLM-based)", 2.4, Rgb(74, 144, 226)),
        ("Agent Layer (5 Specialized Agents)", 3.3, Rgb(66, 165, 245)),
        ("Tool Layer (UI, API, DB, EDI, Reports)", 4.2, Rgb(41, 128, 185)),
        ("Data Layer (Vector DB, PostgreSQL, Redis)", 5.1, Rgb(52, 152, 219)),
    ];

    let mut shapes: Vec<DiagramShape> = layers
        .iter()
        .map(|&(name, y, fill)| {
            labelled(
                Geometry::Rectangle,
                Frame::new(1.5, y, 7.0, 0.7),
                fill,
                WHITE_2PT,
                name,
                16.0,
            )
        })
        .collect();

    shapes.extend(layers.windows(2).map(|pair| {
        connector(Geometry::DownArrow, Frame::new(4.8, pair[0].1 + 0.75, 0.4, 0.5))
    }));

    DiagramSlide {
        title: "🏗️ System Architecture".to_string(),
        title_size: 36.0,
        shapes,
    }
}

/// Central orchestrator surrounded by the specialised agents.
fn agent_architecture() -> DiagramSlide {
    let mut shapes = vec![labelled(
        Geometry::Rectangle,
        Frame::new(3.5, 1.8, 3.0, 0.8),
        Rgb(255, 152, 0),
        Outline {
            color: Rgb(230, 126, 34),
            width: Some(3.0),
        },
        "AI Orchestrator\n(GPT-4/Claude)",
        16.0,
    )];

    let agents = [
        ("Policy\nAgent", 1.5, 3.5, Rgb(76, 175, 80)),
        ("Claims\nAgent", 3.5, 3.0, Rgb(33, 150, 243)),
        ("Member\nAgent", 5.5, 3.5, Rgb(156, 39, 176)),
        ("Integration\nAgent", 5.5, 5.0, Rgb(255, 87, 34)),
        ("Security\nAgent", 3.5, 5.5, Rgb(244, 67, 54)),
        ("Analytics\nAgent", 1.5, 5.0, Rgb(0, 150, 136)),
    ];

    shapes.extend(agents.iter().map(|&(name, x, y, fill)| {
        labelled(
            Geometry::RoundedRectangle,
            Frame::new(x, y, 1.5, 0.8),
            fill,
            WHITE_2PT,
            name,
            13.0,
        )
    }));

    DiagramSlide {
        title: "🤖 Specialized Agent Architecture".to_string(),
        title_size: 32.0,
        shapes,
    }
}

/// Seven pipeline steps left to right, joined by right arrows.
fn execution_flow() -> DiagramSlide {
    let steps = [
        ("1. User\nRequest", Rgb(66, 165, 245)),
        ("2. Orchestrator\nAnalysis", Rgb(74, 144, 226)),
        ("3. Agent\nSelection", Rgb(41, 128, 185)),
        ("4. Test\nGeneration", Rgb(52, 152, 219)),
        ("5. Execution", Rgb(30, 136, 229)),
        ("6. Validation", Rgb(25, 118, 210)),
        ("7. Results", Rgb(21, 101, 192)),
    ];
    let x_start = 1.2;
    let pitch = 1.1;

    let mut shapes = Vec::with_capacity(steps.len() * 2);
    for (i, &(name, fill)) in steps.iter().enumerate() {
        let x = x_start + i as f64 * pitch;
        shapes.push(labelled(
            Geometry::RoundedRectangle,
            Frame::new(x, 2.8, 1.0, 1.2),
            fill,
            WHITE_2PT,
            name,
            11.0,
        ));
        if i + 1 < steps.len() {
            shapes.push(connector(
                Geometry::RightArrow,
                Frame::new(x + 1.05, 3.3, 0.35, 0.2),
            ));
        }
    }

    DiagramSlide {
        title: "📊 Test Execution Flow".to_string(),
        title_size: 36.0,
        shapes,
    }
}
