use std::collections::HashMap;

use super::super::domain::Category;
use super::bands::PriorityBand;

/// Static roadmap content for one (category, band) pair.
#[derive(Debug, Clone)]
pub struct RecommendationTemplate {
    pub category: Category,
    pub band: PriorityBand,
    pub title: &'static str,
    pub description: &'static str,
    pub action_items: Vec<&'static str>,
    pub resources: Vec<&'static str>,
}

/// Lookup table that must cover every category/band pair.
///
/// Coverage gaps are configuration errors surfaced at construction, never
/// at scoring time.
#[derive(Debug)]
pub struct RecommendationRulebook {
    entries: HashMap<(Category, PriorityBand), RecommendationTemplate>,
}

impl RecommendationRulebook {
    /// Built-in table; total over all twelve pairs by construction.
    pub fn standard() -> Self {
        Self {
            entries: standard_templates()
                .into_iter()
                .map(|template| ((template.category, template.band), template))
                .collect(),
        }
    }

    /// Build from caller-supplied templates, rejecting incomplete or
    /// duplicated coverage up front.
    pub fn from_entries(
        templates: Vec<RecommendationTemplate>,
    ) -> Result<Self, RulebookError> {
        let mut entries = HashMap::new();
        for template in templates {
            let key = (template.category, template.band);
            if entries.insert(key, template).is_some() {
                return Err(RulebookError::DuplicateEntry {
                    category: key.0,
                    band: key.1,
                });
            }
        }

        for category in Category::ordered() {
            for band in PriorityBand::ordered() {
                if !entries.contains_key(&(category, band)) {
                    return Err(RulebookError::MissingEntry { category, band });
                }
            }
        }

        Ok(Self { entries })
    }

    pub fn template(
        &self,
        category: Category,
        band: PriorityBand,
    ) -> Option<&RecommendationTemplate> {
        self.entries.get(&(category, band))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RulebookError {
    #[error("no roadmap entry for {} in the {} band", .category.label(), .band.label())]
    MissingEntry {
        category: Category,
        band: PriorityBand,
    },
    #[error("duplicate roadmap entry for {} in the {} band", .category.label(), .band.label())]
    DuplicateEntry {
        category: Category,
        band: PriorityBand,
    },
}

fn standard_templates() -> Vec<RecommendationTemplate> {
    vec![
        // Critical band
        RecommendationTemplate {
            category: Category::Impact,
            band: PriorityBand::Critical,
            title: "Build Your Editorial Foundation",
            description: "Your publication needs to establish consistent content creation and audience engagement.",
            action_items: vec![
                "Develop a regular publishing schedule",
                "Focus on campus-relevant stories that matter to students",
                "Create social media accounts to expand reach",
                "Survey your target audience to understand their interests",
            ],
            resources: vec![
                "Student Press Law Center (SPLC) guidelines",
                "Campus journalism best practices",
                "Social media strategy templates",
            ],
        },
        RecommendationTemplate {
            category: Category::Resilience,
            band: PriorityBand::Critical,
            title: "Strengthen Your Operations",
            description: "Your organization needs better structure and processes to maintain consistent operations.",
            action_items: vec![
                "Recruit more staff members through campus outreach",
                "Create clear editorial workflows and style guides",
                "Establish regular meeting schedules",
                "Document key processes for continuity",
            ],
            resources: vec![
                "Student media organizational templates",
                "Editorial workflow examples",
                "Staff recruitment strategies",
            ],
        },
        RecommendationTemplate {
            category: Category::Financial,
            band: PriorityBand::Critical,
            title: "Secure Sustainable Funding",
            description: "Financial stability is critical for your publication's survival and growth.",
            action_items: vec![
                "Create a detailed budget with all expenses",
                "Research student fee allocation processes",
                "Develop advertising packages for local businesses",
                "Apply for student organization grants",
            ],
            resources: vec![
                "Student media budgeting guides",
                "Local business advertising templates",
                "Grant application resources",
            ],
        },
        RecommendationTemplate {
            category: Category::Education,
            band: PriorityBand::Critical,
            title: "Invest in Skills Development",
            description: "Your team needs foundational journalism training and ongoing education.",
            action_items: vec![
                "Partner with journalism faculty for training workshops",
                "Attend student media conferences and workshops",
                "Create mentorship programs with experienced journalists",
                "Study media law and ethics fundamentals",
            ],
            resources: vec![
                "Associated Collegiate Press (ACP) resources",
                "Journalism ethics handbooks",
                "Student media conference calendar",
            ],
        },
        // Improving band
        RecommendationTemplate {
            category: Category::Impact,
            band: PriorityBand::Improving,
            title: "Expand Your Impact",
            description: "You have good fundamentals. Focus on growing your audience and influence.",
            action_items: vec![
                "Investigate more in-depth stories",
                "Collaborate with other campus organizations",
                "Develop multimedia content capabilities",
                "Create email newsletters for loyal readers",
            ],
            resources: vec![
                "Investigative journalism guides",
                "Multimedia storytelling tools",
                "Audience engagement strategies",
            ],
        },
        RecommendationTemplate {
            category: Category::Resilience,
            band: PriorityBand::Improving,
            title: "Optimize Your Operations",
            description: "Your operations are solid. Focus on efficiency and succession planning.",
            action_items: vec![
                "Implement project management tools",
                "Create leadership development programs",
                "Document institutional knowledge",
                "Establish alumni network connections",
            ],
            resources: vec![
                "Project management software options",
                "Leadership training programs",
                "Alumni engagement strategies",
            ],
        },
        RecommendationTemplate {
            category: Category::Financial,
            band: PriorityBand::Improving,
            title: "Diversify Revenue Streams",
            description: "Your finances are stable. Work on building multiple income sources.",
            action_items: vec![
                "Launch targeted advertising campaigns",
                "Explore event hosting opportunities",
                "Consider premium content offerings",
                "Build corporate sponsorship relationships",
            ],
            resources: vec![
                "Revenue diversification guides",
                "Sponsorship proposal templates",
                "Event planning resources",
            ],
        },
        RecommendationTemplate {
            category: Category::Education,
            band: PriorityBand::Improving,
            title: "Advance Professional Skills",
            description: "Your team has good basics. Focus on specialized skills and advanced training.",
            action_items: vec![
                "Attend advanced journalism workshops",
                "Develop expertise in specific beats",
                "Create cross-training programs",
                "Establish professional mentorships",
            ],
            resources: vec![
                "Specialized journalism training programs",
                "Professional journalism associations",
                "Advanced skill-building workshops",
            ],
        },
        // Strong band
        RecommendationTemplate {
            category: Category::Impact,
            band: PriorityBand::Strong,
            title: "Maintain Excellence",
            description: "Your impact is strong. Focus on innovation and setting industry standards.",
            action_items: vec![
                "Experiment with new storytelling formats",
                "Mentor other student publications",
                "Enter journalism competitions",
                "Develop signature coverage areas",
            ],
            resources: vec![
                "Journalism award competitions",
                "Innovation in student media",
                "Peer mentorship programs",
            ],
        },
        RecommendationTemplate {
            category: Category::Resilience,
            band: PriorityBand::Strong,
            title: "Innovation and Growth",
            description: "Your operations are excellent. Consider expansion and new initiatives.",
            action_items: vec![
                "Launch new publication formats or platforms",
                "Develop strategic partnerships",
                "Create advanced training programs",
                "Share best practices with other organizations",
            ],
            resources: vec![
                "Strategic partnership opportunities",
                "Advanced organizational development",
                "Best practice sharing platforms",
            ],
        },
        RecommendationTemplate {
            category: Category::Financial,
            band: PriorityBand::Strong,
            title: "Financial Leadership",
            description: "Your finances are strong. Focus on long-term sustainability and growth.",
            action_items: vec![
                "Build emergency reserves",
                "Invest in major equipment upgrades",
                "Create scholarship programs",
                "Develop endowment fundraising",
            ],
            resources: vec![
                "Endowment development guides",
                "Long-term financial planning",
                "Equipment investment strategies",
            ],
        },
        RecommendationTemplate {
            category: Category::Education,
            band: PriorityBand::Strong,
            title: "Industry Leadership",
            description: "Your educational foundation is excellent. Focus on teaching and leading others.",
            action_items: vec![
                "Publish industry research or guides",
                "Speak at student media conferences",
                "Develop curriculum for other programs",
                "Create professional development content",
            ],
            resources: vec![
                "Conference speaking opportunities",
                "Academic publishing options",
                "Professional development creation tools",
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_covers_every_category_band_pair() {
        let rulebook = RecommendationRulebook::standard();
        for category in Category::ordered() {
            for band in PriorityBand::ordered() {
                assert!(
                    rulebook.template(category, band).is_some(),
                    "missing entry for {} / {}",
                    category.label(),
                    band.label()
                );
            }
        }
    }

    #[test]
    fn standard_templates_carry_expected_content_shape() {
        for template in standard_templates() {
            assert!(
                (3..=4).contains(&template.action_items.len()),
                "{} lists {} action items",
                template.title,
                template.action_items.len()
            );
            assert_eq!(
                template.resources.len(),
                3,
                "{} lists {} resources",
                template.title,
                template.resources.len()
            );
            assert!(!template.description.is_empty());
        }
    }

    #[test]
    fn from_entries_rejects_missing_coverage() {
        let mut templates = standard_templates();
        templates.retain(|template| {
            !(template.category == Category::Financial && template.band == PriorityBand::Strong)
        });

        match RecommendationRulebook::from_entries(templates) {
            Err(RulebookError::MissingEntry { category, band }) => {
                assert_eq!(category, Category::Financial);
                assert_eq!(band, PriorityBand::Strong);
            }
            other => panic!("expected missing entry error, got {other:?}"),
        }
    }

    #[test]
    fn from_entries_rejects_duplicate_coverage() {
        let mut templates = standard_templates();
        let duplicate = templates[0].clone();
        templates.push(duplicate);

        assert!(matches!(
            RecommendationRulebook::from_entries(templates),
            Err(RulebookError::DuplicateEntry {
                category: Category::Impact,
                band: PriorityBand::Critical,
            })
        ));
    }

    #[test]
    fn from_entries_accepts_the_full_standard_set() {
        assert!(RecommendationRulebook::from_entries(standard_templates()).is_ok());
    }
}
