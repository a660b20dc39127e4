//! Business Requirements Document assembly, driven by the signals produced
//! by [`crate::enhance::analysis`]. Pure string concatenation; given any
//! input text the assembly always succeeds.

use chrono::Utc;

use crate::enhance::analysis::{BusinessAnalysis, Complexity};

const AREA_DEFAULTS: [&str; 3] = ["Core System Functions", "User Management", "Data Processing"];

pub fn generate_brd(content: &str, analysis: &BusinessAnalysis) -> String {
    let current_date = Utc::now().format("%B %-d, %Y");
    let title = project_title(content, analysis);

    let mut areas: Vec<&str> = analysis.functional_areas.clone();
    for (i, default) in AREA_DEFAULTS.iter().enumerate() {
        if areas.len() <= i {
            areas.push(default);
        }
    }

    let functional_sections = areas
        .iter()
        .map(|area| format!("### {area}:\n{}", functional_requirements(area)))
        .collect::<Vec<_>>()
        .join("\n\n");

    let external_stakeholders = if analysis.integrations.is_empty() {
        "- **Vendor Partners:** Third-party service providers as needed".to_string()
    } else {
        analysis
            .integrations
            .iter()
            .map(|i| format!("- **{i} Providers:** External service providers for system integration"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let external_systems = if analysis.integrations.is_empty() {
        "- **Standard Web Services:** Basic HTTP/REST API integrations as needed".to_string()
    } else {
        analysis
            .integrations
            .iter()
            .map(|i| format!("- **{i}:** {}", integration_details(i)))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let primary_stakeholders = analysis
        .stakeholders
        .iter()
        .map(|s| format!("- **{s}:** {}", stakeholder_role(s)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# {title}

## Document Version
- **Version:** 1.0
- **Date:** {current_date}
- **Prepared By:** AI Business Analyst
- **Document Status:** Draft
- **Project Complexity:** {complexity}
- **Estimated Timeline:** {timeline}

## Purpose & Background

### Business Need
{business_need}

### Current State Analysis
{current_state}

### Proposed Solution
{proposed_solution}

## Scope of the Requirement

### In-Scope:
{in_scope}

### Out-of-Scope:
{out_of_scope}

### Success Metrics
{success_metrics}

## Stakeholders / Actors

### Primary Stakeholders:
{primary_stakeholders}

### Secondary Stakeholders:
- **Quality Assurance Team:** Ensures system meets quality standards and testing requirements
- **Security Team:** Reviews and approves security implementations and protocols
- **Infrastructure Team:** Manages deployment environment and system resources
- **Business Analyst:** Facilitates requirements gathering and stakeholder communication

### External Stakeholders:
{external_stakeholders}

## Business Requirements

### Core Business Objectives:
1. **Primary Goal:** {primary_goal}
2. **Business Value Delivery:** {business_value}
3. **Operational Excellence:** Improve {operational_focus}
4. **User Experience:** {ux_requirement}
5. **Scalability:** Support future growth and expansion requirements
6. **Compliance:** Meet all relevant industry standards and regulations

### Key Performance Indicators (KPIs):
{kpis}

## Functional Requirements

{functional_sections}

## Non-Functional Requirements

### Performance Requirements:
- **Response Time:** {perf_response}
- **Throughput:** {perf_throughput}
- **Availability:** {perf_availability}
- **Scalability:** {perf_scalability}

### Security Requirements:
{security_requirements}

### Usability Requirements:
{usability_requirements}

### Compatibility Requirements:
{compatibility_requirements}

## Assumptions and Constraints

### Assumptions:
{assumptions}

### Constraints:
{constraints}

### Dependencies:
{dependencies}

## Workflow / Process Flow Diagram (Described in Steps)

### Primary Business Process:
{workflow_steps}

### Exception Handling:
{exception_handling}

### Decision Points:
{decision_points}

## UI/UX Expectations

### Design Principles:
{design_principles}

### User Interface Requirements:
{ui_requirements}

### User Experience Goals:
{ux_goals}

## Integration Requirements

### Internal Systems:
{internal_integrations}

### External Systems:
{external_systems}

### Data Exchange:
{data_exchange}

## Testing & Validation Criteria

### Testing Strategy:
{testing_strategy}

### Acceptance Criteria:
{acceptance_criteria}

### Quality Gates:
{quality_gates}

## Future Enhancements (Optional)

### Phase 2 Roadmap:
{phase2}

### Long-term Vision:
{long_term_vision}

### Technology Evolution:
{technology_evolution}

## Glossary / Definitions

{glossary}

---

**Document Classification:** {urgency} Priority | {complexity} Complexity | {scope} Scope

**Next Steps:**
1. Stakeholder review and approval of this BRD
2. Technical architecture design and planning
3. Project timeline and resource allocation
4. Development phase initiation

**Note:** This AI-generated BRD provides a comprehensive foundation based on the input provided. \
Please review, validate, and refine all sections with domain experts and stakeholders before \
proceeding with implementation.",
        title = title,
        current_date = current_date,
        complexity = analysis.complexity,
        timeline = estimate_timeline(analysis),
        business_need = business_need(content, analysis),
        current_state = current_state_analysis(),
        proposed_solution = proposed_solution(analysis),
        in_scope = in_scope_items(analysis),
        out_of_scope = out_of_scope_items(),
        success_metrics = success_metrics(analysis),
        primary_stakeholders = primary_stakeholders,
        external_stakeholders = external_stakeholders,
        primary_goal = primary_goal(analysis),
        business_value = analysis.business_value,
        operational_focus = operational_focus(analysis),
        ux_requirement = ux_requirement(analysis),
        kpis = kpis(),
        functional_sections = functional_sections,
        perf_response = performance_requirement(analysis.complexity, PerfKind::Response),
        perf_throughput = performance_requirement(analysis.complexity, PerfKind::Throughput),
        perf_availability = performance_requirement(analysis.complexity, PerfKind::Availability),
        perf_scalability = performance_requirement(analysis.complexity, PerfKind::Scalability),
        security_requirements = security_requirements(),
        usability_requirements = usability_requirements(),
        compatibility_requirements = compatibility_requirements(analysis),
        assumptions = assumptions(),
        constraints = constraints(analysis),
        dependencies = dependencies(analysis),
        workflow_steps = workflow_steps(analysis),
        exception_handling = exception_handling(),
        decision_points = decision_points(analysis),
        design_principles = design_principles(),
        ui_requirements = ui_requirements(analysis),
        ux_goals = ux_goals(),
        internal_integrations = internal_integrations(),
        external_systems = external_systems,
        data_exchange = data_exchange(),
        testing_strategy = testing_strategy(analysis),
        acceptance_criteria = acceptance_criteria(analysis),
        quality_gates = quality_gates(),
        phase2 = phase2_roadmap(analysis),
        long_term_vision = long_term_vision(analysis),
        technology_evolution = technology_evolution(),
        glossary = glossary(analysis),
        urgency = analysis.urgency,
        scope = analysis.scope,
    )
}

/// Derive a document title from the first sentence of the input, falling
/// back to the detected project type.
fn project_title(content: &str, analysis: &BusinessAnalysis) -> String {
    let first_sentence = content
        .split(['.', '!', '?', '\n'])
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(analysis.project_type);

    let mut title = if first_sentence.len() > 60 {
        let cut: String = first_sentence.chars().take(60).collect();
        format!("{}...", cut.trim())
    } else {
        first_sentence.to_string()
    };

    let mut chars = title.chars();
    if let Some(first) = chars.next() {
        title = first.to_uppercase().collect::<String>() + chars.as_str();
    }

    let lower = title.to_lowercase();
    if !lower.contains("system") && !lower.contains("application") && !lower.contains("platform") {
        title.push(' ');
        title.push_str(analysis.project_type);
    }

    title
}

fn estimate_timeline(analysis: &BusinessAnalysis) -> &'static str {
    let high = analysis.complexity == Complexity::High;
    let medium = analysis.complexity == Complexity::Medium;
    let large = analysis.scope == "Large";
    let mid_scope = analysis.scope == "Medium";

    if high && large {
        "6-12 months"
    } else if high || large {
        "4-8 months"
    } else if medium && mid_scope {
        "3-6 months"
    } else if medium || mid_scope {
        "2-4 months"
    } else {
        "1-3 months"
    }
}

fn business_need(content: &str, analysis: &BusinessAnalysis) -> String {
    let business_context = content
        .split(['.', '!', '?', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(3)
        .collect::<Vec<_>>()
        .join(". ");

    format!(
        "The organization requires {project} to address current business challenges and \
         opportunities. {business_context}

This initiative aligns with strategic business objectives to achieve {value} and enhance \
operational capabilities. The proposed solution will serve as a critical enabler for business \
growth and competitive advantage.",
        project = analysis.project_type.to_lowercase(),
        value = analysis.business_value.to_lowercase(),
    )
}

fn current_state_analysis() -> &'static str {
    "**Current Challenges:**
- Manual processes leading to inefficiencies and errors
- Limited visibility into business operations and performance
- Fragmented systems requiring better integration
- Growing user demands for improved digital experiences

**Opportunity Assessment:**
- Automation potential to reduce operational costs by 20-30%
- Enhanced data analytics capabilities for better decision making
- Improved user satisfaction through streamlined processes
- Scalable architecture to support future business growth"
}

fn proposed_solution(analysis: &BusinessAnalysis) -> String {
    let mobile_line = if analysis.project_type.contains("Mobile") {
        "Native mobile experience"
    } else {
        "Responsive design for mobile access"
    };

    format!(
        "The proposed {project} will provide a comprehensive solution addressing identified \
         business needs. Key solution components include:

- **Modern Architecture:** Scalable, secure, and maintainable system design
- **User-Centric Design:** Intuitive interfaces optimized for user productivity
- **Integration Capabilities:** Seamless connectivity with existing business systems
- **Advanced Analytics:** Real-time insights and reporting for data-driven decisions
- **Mobile Accessibility:** {mobile_line}",
        project = analysis.project_type.to_lowercase(),
    )
}

fn in_scope_items(analysis: &BusinessAnalysis) -> String {
    let mut items = vec![
        format!("- {} development and implementation", analysis.project_type),
        "- User training and change management".to_string(),
        "- System testing and quality assurance".to_string(),
        "- Initial deployment and go-live support".to_string(),
        "- Documentation and user manuals".to_string(),
    ];

    for area in &analysis.functional_areas {
        items.push(format!("- {area} functionality"));
    }
    for integration in &analysis.integrations {
        items.push(format!("- {integration} integration"));
    }

    items.join("\n")
}

fn out_of_scope_items() -> &'static str {
    "- Hardware procurement and infrastructure setup
- Legacy system decommissioning and data migration
- Third-party software licensing and ongoing maintenance
- Advanced AI/ML capabilities (future enhancement)
- Custom hardware or specialized equipment
- Ongoing operational support beyond warranty period"
}

fn success_metrics(analysis: &BusinessAnalysis) -> String {
    let efficiency = if analysis.business_value == "Cost Reduction" {
        "20-30% cost reduction"
    } else {
        "25-40% improvement in process efficiency"
    };

    format!(
        "- User adoption rate: >90% within 3 months of deployment
- System performance: Meeting all specified performance requirements
- Business process efficiency: {efficiency}
- User satisfaction score: >4.0/5.0 in post-implementation surveys
- System availability: >99.5% uptime during business hours"
    )
}

fn stakeholder_role(stakeholder: &str) -> &'static str {
    match stakeholder {
        "System Administrator" => {
            "Manages system configuration, user access, and technical maintenance"
        }
        "End Users" => "Primary users who interact with the system for daily business operations",
        "Management Team" => "Provides strategic direction and approves business decisions",
        "Development Team" => "Responsible for technical implementation and system development",
        "Finance Department" => "Manages budget, financial approvals, and cost tracking",
        "HR Department" => {
            "Handles user onboarding, training, and organizational change management"
        }
        "Sales & Marketing" => "Utilizes system for customer engagement and business development",
        "Support Team" => "Provides user support and issue resolution",
        _ => "Key stakeholder in the project implementation and success",
    }
}

fn primary_goal(analysis: &BusinessAnalysis) -> String {
    format!(
        "Deliver a comprehensive {} that enhances {}",
        analysis.project_type.to_lowercase(),
        analysis.business_value.to_lowercase()
    )
}

fn operational_focus(analysis: &BusinessAnalysis) -> String {
    analysis
        .functional_areas
        .first()
        .map(|a| a.to_lowercase())
        .unwrap_or_else(|| "core business processes".to_string())
}

fn ux_requirement(analysis: &BusinessAnalysis) -> &'static str {
    if analysis.project_type.contains("Mobile") {
        "Deliver a fast, touch-first experience across devices"
    } else {
        "Provide intuitive, accessible interfaces requiring minimal training"
    }
}

fn kpis() -> &'static str {
    "- System utilization: >85% user engagement
- Process efficiency: 30-50% improvement
- User satisfaction: >4.0/5.0 rating"
}

fn functional_requirements(area: &str) -> String {
    format!(
        "- Core functionality for {area}
- Data validation and processing
- User interface components
- Integration capabilities"
    )
}

enum PerfKind {
    Response,
    Throughput,
    Availability,
    Scalability,
}

fn performance_requirement(complexity: Complexity, kind: PerfKind) -> &'static str {
    match kind {
        PerfKind::Response => match complexity {
            Complexity::High => "Under 1 second for critical operations, under 3 seconds overall",
            Complexity::Medium => "Under 2 seconds for standard operations",
            Complexity::Low => "Under 3 seconds for all operations",
        },
        PerfKind::Throughput => match complexity {
            Complexity::High => "Support 1000+ concurrent users",
            Complexity::Medium => "Support 250+ concurrent users",
            Complexity::Low => "Support 50+ concurrent users",
        },
        PerfKind::Availability => match complexity {
            Complexity::High => "99.9% uptime with defined maintenance windows",
            _ => "99.5% uptime during business hours",
        },
        PerfKind::Scalability => match complexity {
            Complexity::High => "Horizontal scaling to handle 3x projected peak load",
            _ => "Capacity for 2x user growth without redesign",
        },
    }
}

fn security_requirements() -> &'static str {
    "- Role-based access control with least-privilege defaults
- Encrypted data in transit and at rest
- Audit logging of security-relevant events
- Regular vulnerability assessment and patching"
}

fn usability_requirements() -> &'static str {
    "- Task completion by a first-time user without formal training
- Consistent navigation and terminology across modules
- Accessible to users with disabilities (WCAG 2.1 AA)
- Inline validation with clear, actionable error messages"
}

fn compatibility_requirements(analysis: &BusinessAnalysis) -> String {
    let platform_line = if analysis.project_type.contains("Mobile") {
        "- Native or hybrid support for current iOS and Android versions"
    } else {
        "- Current versions of major browsers (Chrome, Firefox, Safari, Edge)"
    };

    format!(
        "{platform_line}
- Responsive layouts from phone to large desktop displays
- Standard data export formats (CSV, JSON)"
    )
}

fn assumptions() -> &'static str {
    "- Business stakeholders are available for requirement clarification and reviews
- Existing infrastructure can host the new system or cloud hosting is approved
- Source data needed by the system is accessible and of acceptable quality
- End users have access to supported devices and browsers"
}

fn constraints(analysis: &BusinessAnalysis) -> String {
    format!(
        "- Delivery within the estimated {timeline} timeline
- Budget limited to the approved project allocation
- Must comply with existing organizational IT policies
- Integration limited to documented interfaces of connected systems",
        timeline = estimate_timeline(analysis),
    )
}

fn dependencies(analysis: &BusinessAnalysis) -> String {
    if analysis.integrations.is_empty() {
        return "- Timely provisioning of hosting environments\n- Stakeholder sign-off at each phase gate".to_string();
    }

    let mut lines: Vec<String> = analysis
        .integrations
        .iter()
        .map(|i| format!("- Availability and stability of {i}"))
        .collect();
    lines.push("- Timely provisioning of hosting environments".to_string());
    lines.push("- Stakeholder sign-off at each phase gate".to_string());
    lines.join("\n")
}

fn workflow_steps(analysis: &BusinessAnalysis) -> String {
    format!(
        "1. User authenticates and is routed to their role-appropriate workspace
2. User initiates a {area} task from the main dashboard
3. System validates the input and applies business rules
4. Processed data is persisted and relevant parties are notified
5. Results are available for review, reporting, and follow-up actions",
        area = operational_focus(analysis),
    )
}

fn exception_handling() -> &'static str {
    "- Invalid input: reject with field-level messages, preserve entered data
- Unavailable integration: queue the operation and retry with backoff
- Authorization failure: deny with an audit trail entry
- Unexpected system error: fail safe, log diagnostics, notify support"
}

fn decision_points(analysis: &BusinessAnalysis) -> String {
    format!(
        "- Access decision: is the requesting user authorized for the resource?
- Validation decision: does the submission satisfy business rules?
- Routing decision: does the item require {value_check} review before completion?
- Escalation decision: has an operation exceeded its expected processing window?",
        value_check = if analysis.urgency == "High" {
            "expedited"
        } else {
            "standard"
        },
    )
}

fn design_principles() -> &'static str {
    "- Clarity first: every screen states its purpose and next action
- Consistency: shared components, terminology, and interaction patterns
- Progressive disclosure: advanced options stay out of the default path
- Feedback: every user action yields an immediate, visible response"
}

fn ui_requirements(analysis: &BusinessAnalysis) -> String {
    format!(
        "- Dashboard summarizing {area} status at a glance
- Searchable, filterable list views with bulk operations
- Guided forms with inline validation for data entry
- Clear empty, loading, and error states throughout",
        area = operational_focus(analysis),
    )
}

fn ux_goals() -> &'static str {
    "- Minimize clicks for the most frequent tasks
- Keep users oriented: breadcrumbs and persistent navigation
- Support keyboard-only operation for power users
- Measure and iterate on task completion rates after launch"
}

fn internal_integrations() -> &'static str {
    "- Single sign-on with the organization's identity provider
- Shared reporting/data warehouse feeds where applicable
- Centralized logging and monitoring infrastructure"
}

fn integration_details(integration: &str) -> &'static str {
    match integration {
        "External APIs" => "REST/SOAP interfaces with documented contracts and versioning",
        "Database Systems" => "Read/write access with connection pooling and migration control",
        "Email Services" => "Transactional mail delivery with bounce and failure handling",
        "Payment Gateways" => "PCI-compliant payment capture and reconciliation flows",
        "SMS Services" => "Outbound notification delivery with opt-out management",
        "Cloud Services" => "Managed hosting, storage, and platform service dependencies",
        "Directory Services" => "User and group synchronization for authentication",
        _ => "Interface contract to be defined during technical design",
    }
}

fn data_exchange() -> &'static str {
    "- JSON over HTTPS for service-to-service communication
- Scheduled batch exports for reporting consumers
- Schema-validated payloads with versioned contracts
- Idempotent handling of retried messages"
}

fn testing_strategy(analysis: &BusinessAnalysis) -> String {
    let load_line = match analysis.complexity {
        Complexity::High => {
            "- Load and stress testing against 3x projected peak volumes"
        }
        Complexity::Medium => "- Load testing against projected peak volumes",
        Complexity::Low => "- Baseline performance verification under normal load",
    };

    format!(
        "- Unit and integration testing as part of every change
- End-to-end scenario testing of the primary business workflows
{load_line}
- Security testing covering authentication, authorization, and data protection
- User acceptance testing with representative business users"
    )
}

fn acceptance_criteria(analysis: &BusinessAnalysis) -> String {
    format!(
        "- All in-scope {project} functionality implemented and verified
- Non-functional requirements met and evidenced by test results
- No open critical or high-severity defects at go-live
- Documentation and training materials delivered and approved",
        project = analysis.project_type.to_lowercase(),
    )
}

fn quality_gates() -> &'static str {
    "- Requirements sign-off before design begins
- Design review approval before implementation
- Test exit criteria met before user acceptance testing
- Go-live readiness review before production deployment"
}

fn phase2_roadmap(analysis: &BusinessAnalysis) -> String {
    format!(
        "- Extended {area} capabilities based on initial usage feedback
- Additional third-party integrations beyond the launch set
- Advanced reporting with self-service dashboard authoring
- Workflow automation for recurring manual steps",
        area = operational_focus(analysis),
    )
}

fn long_term_vision(analysis: &BusinessAnalysis) -> String {
    format!(
        "Evolve the {project} into the organization's system of record for its domain, with \
         predictive insights, deeper automation, and measurable contribution to {value}.",
        project = analysis.project_type.to_lowercase(),
        value = analysis.business_value.to_lowercase(),
    )
}

fn technology_evolution() -> &'static str {
    "- Periodic review of platform and dependency currency
- Incremental adoption of AI/ML assistance where it proves value
- API-first posture to keep future integrations inexpensive"
}

fn glossary(analysis: &BusinessAnalysis) -> String {
    let mut entries = vec![
        format!(
            "- **{}:** The category of solution this document specifies",
            analysis.project_type
        ),
        "- **BRD:** Business Requirements Document, this document".to_string(),
        "- **KPI:** Key Performance Indicator, a measurable success signal".to_string(),
        "- **UAT:** User Acceptance Testing, validation by business users".to_string(),
    ];

    for integration in &analysis.integrations {
        entries.push(format!(
            "- **{integration}:** {}",
            integration_details(integration)
        ));
    }

    entries.join("\n")
}
