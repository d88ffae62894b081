//! Static project-details table backing the portfolio grid and its modal.

/// Everything the modal renders for one project.
#[derive(Clone, Copy, Debug)]
pub struct Project {
	pub key: &'static str,
	pub title: &'static str,
	pub description: &'static str,
	pub technologies: &'static [&'static str],
	pub features: &'static [&'static str],
	pub challenges: &'static [&'static str],
	pub outcomes: &'static [&'static str],
	pub link: Option<&'static str>,
}

/// All portfolio projects, in display order.
pub static PROJECTS: &[Project] = &[
	Project {
		key: "traefik",
		title: "Traefik Load Balancing Infrastructure",
		description: "A sophisticated multi-OS web infrastructure solution leveraging Docker \
			containerization and Traefik reverse proxy for intelligent load balancing and \
			automatic service discovery.",
		technologies: &[
			"Docker",
			"Traefik",
			"Linux",
			"Windows",
			"Load Balancing",
			"Reverse Proxy",
		],
		features: &[
			"Multi-OS compatibility (Linux and Windows)",
			"Automatic service discovery and configuration",
			"SSL/TLS certificate management",
			"Health checks and failover mechanisms",
			"Real-time monitoring and logging",
			"Scalable microservices architecture",
		],
		challenges: &[
			"Cross-platform containerization complexities",
			"Dynamic load balancing configuration",
			"Security certificate automation",
			"Performance optimization across different OS environments",
		],
		outcomes: &[
			"Achieved 99.9% uptime across all services",
			"Reduced deployment time by 70%",
			"Improved system scalability and maintainability",
			"Enhanced security with automated SSL management",
		],
		link: Some(
			"https://sheer-mangosteen-78e.notion.site/Final-Exam-1f9a0d6b921f8008a54df366a26772c6",
		),
	},
	Project {
		key: "auca",
		title: "AUCA Innovation Center Competition Management",
		description: "Comprehensive project management of a university-wide fintech innovation \
			competition, including strategic planning, stakeholder coordination, and custom \
			grading system development.",
		technologies: &["Project Management", "PRINCE2", "Stakeholder Management"],
		features: &[
			"End-to-end project lifecycle management",
			"Custom grading system development",
			"Multi-stakeholder coordination",
			"Risk assessment and mitigation strategies",
			"Resource allocation and budget management",
			"Timeline optimization and milestone tracking",
		],
		challenges: &[
			"Coordinating multiple stakeholder groups",
			"Balancing academic requirements with industry standards",
			"Developing fair and transparent evaluation criteria",
			"Managing tight deadlines with quality deliverables",
		],
		outcomes: &[
			"Successfully delivered project on time and within budget",
			"100 student participants across multiple Departments",
			"Established sustainable framework for future competitions",
			"Enhanced university-industry collaboration",
		],
		link: None,
	},
	Project {
		key: "un-dashboard",
		title: "UN Big Data Analytics Dashboard",
		description: "This comprehensive big data analytics capstone project examines temperature \
			change patterns across African countries using official FAOSTAT climate data from \
			2010-2020. The analysis combines advanced statistical methods, machine learning \
			algorithms, and interactive visualization to provide evidence-based insights for \
			climate adaptation policy development",
		technologies: &[
			"Power BI",
			"Data Science",
			"Python",
			"SQL",
			"Data Visualization",
			"Analytics",
		],
		features: &[
			"Interactive data visualization dashboards",
			"Real-time data processing and updates",
			"Multi-dimensional analytical reporting",
			"Geographic data mapping and visualization",
			"Automated report generation",
		],
		challenges: &[
			"Handling large-scale global datasets",
			"Ensuring data accuracy and consistency",
			"Creating intuitive interfaces for non-technical users",
		],
		outcomes: &[
			"Streamlined decision-making processes",
			"Improved data accessibility for stakeholders",
			"Enhanced reporting efficiency by 60%",
			"Enabled data-driven policy recommendations",
		],
		link: None,
	},
	Project {
		key: "coffee-system",
		title: "Enterprise Java Coffee Management System",
		description: "Robust enterprise-grade coffee shop management system built with Java and \
			Hibernate ORM, featuring comprehensive inventory management, customer relations, and \
			sales analytics.",
		technologies: &["Java", "Hibernate ORM", "MySQL"],
		features: &[
			"Complete inventory management system",
			"Customer relationship management (CRM)",
			"Sales analytics and reporting",
			"Multi-location support",
			"Employee management and scheduling",
			"Automated reorder point calculations",
		],
		challenges: &[
			"Complex database relationships and optimization",
			"Real-time inventory synchronization",
			"Scalable architecture design",
			"Integration with existing POS systems",
		],
		outcomes: &[
			"Reduced inventory waste by 35%",
			"Improved customer service efficiency",
			"Streamlined multi-location operations",
			"Enhanced data-driven business insights",
		],
		link: None,
	},
	Project {
		key: "food-delivery",
		title: "Responsive Food Delivery Application",
		description: "An early frontend development project showcasing mastery of responsive web \
			design principles, creating an intuitive and visually appealing food delivery \
			platform using modern HTML5 and CSS3 techniques.",
		technologies: &[
			"HTML5",
			"CSS3",
			"Responsive Design",
			"JavaScript",
			"Mobile-First Approach",
		],
		features: &[
			"Fully responsive design across all devices",
			"Intuitive user interface and navigation",
			"Modern CSS3 animations and transitions",
			"Mobile-first responsive approach",
			"Cross-browser compatibility",
			"Accessibility-compliant design",
		],
		challenges: &[
			"Creating pixel-perfect responsive layouts",
			"Ensuring consistent experience across devices",
			"Optimizing performance and loading times",
			"Implementing modern design trends",
		],
		outcomes: &[
			"Achieved 100% mobile responsiveness score",
			"Demonstrated strong frontend development skills",
			"Created reusable component library",
			"Established foundation for advanced web development",
		],
		link: None,
	},
];

/// Look up a project by its card key.
pub fn by_key(key: &str) -> Option<&'static Project> {
	PROJECTS.iter().find(|project| project.key == key)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_finds_every_listed_project() {
		assert_eq!(PROJECTS.len(), 5);
		for project in PROJECTS {
			let found = by_key(project.key).expect("listed project must resolve");
			assert_eq!(found.title, project.title);
		}
	}

	#[test]
	fn lookup_rejects_unknown_keys() {
		assert!(by_key("nonexistent").is_none());
		assert!(by_key("").is_none());
	}

	#[test]
	fn only_traefik_links_out() {
		for project in PROJECTS {
			assert_eq!(project.link.is_some(), project.key == "traefik");
		}
	}

	#[test]
	fn every_project_is_fully_described() {
		for project in PROJECTS {
			assert!(!project.technologies.is_empty());
			assert!(!project.features.is_empty());
			assert!(!project.challenges.is_empty());
			assert!(!project.outcomes.is_empty());
		}
	}
}
