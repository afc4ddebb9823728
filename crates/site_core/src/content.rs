//! Static copy and image references for every page section.

use shared::domain::{
    Availability, ContactChannel, Glyph, HeroHighlight, ImageRef, LinkGroup, ProcessStep,
    Project, SectionHeading, Service, TeamMember, Testimonial,
};

use crate::filter::ALL_CATEGORIES;

pub const BRAND_NAME: &str = "PixelPerfect";
pub const BRAND_TAGLINE: &str = "Crafting cutting-edge digital experiences that inspire and engage. We build websites that work for your business.";

pub const HERO_BADGE: &str = "We bring your digital ideas to life";
pub const HERO_LEAD: &str = "We're a team of designers and developers crafting beautiful, functional websites and applications that help businesses grow.";

pub const HERO_HIGHLIGHTS: &[HeroHighlight] = &[
    HeroHighlight {
        glyph: Glyph::Code,
        title: "Clean Code",
        description: "We write clean, maintainable code that scales with your business.",
    },
    HeroHighlight {
        glyph: Glyph::Sparkles,
        title: "Beautiful Design",
        description: "Pixel-perfect UI/UX design that engages and delights your users.",
    },
    HeroHighlight {
        glyph: Glyph::Zap,
        title: "Fast Performance",
        description: "Optimized for speed to ensure the best user experience.",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        slug: "web-development",
        glyph: Glyph::Code,
        title: "Web Development",
        description: "Custom websites built with modern technologies that are fast, secure, and scalable.",
        tags: &["React", "Next.js", "TypeScript", "Tailwind CSS"],
    },
    Service {
        slug: "ui-ux-design",
        glyph: Glyph::Palette,
        title: "UI/UX Design",
        description: "Beautiful, intuitive interfaces designed with your users in mind to create engaging experiences.",
        tags: &["Figma", "User Research", "Prototyping", "Design Systems"],
    },
    Service {
        slug: "e-commerce-solutions",
        glyph: Glyph::ShoppingCart,
        title: "E-Commerce Solutions",
        description: "Custom online stores that drive sales and provide seamless shopping experiences.",
        tags: &["Shopify", "WooCommerce", "Payment Integration", "Inventory Management"],
    },
    Service {
        slug: "mobile-applications",
        glyph: Glyph::Smartphone,
        title: "Mobile Applications",
        description: "Native and cross-platform mobile apps that work seamlessly across all devices.",
        tags: &["React Native", "iOS", "Android", "Flutter"],
    },
    Service {
        slug: "seo-optimization",
        glyph: Glyph::BarChart,
        title: "SEO Optimization",
        description: "Improve your visibility in search engines and drive more organic traffic to your site.",
        tags: &["Keyword Research", "On-Page SEO", "Technical SEO", "Analytics"],
    },
    Service {
        slug: "digital-strategy",
        glyph: Glyph::Lightbulb,
        title: "Digital Strategy",
        description: "Comprehensive digital strategies tailored to your business goals and target audience.",
        tags: &["Market Research", "Competitor Analysis", "User Journey Mapping", "Growth Strategy"],
    },
    Service {
        slug: "cms-development",
        glyph: Glyph::Layers,
        title: "CMS Development",
        description: "Custom content management systems that make updating your website easy and efficient.",
        tags: &["WordPress", "Headless CMS", "Strapi", "Sanity"],
    },
    Service {
        slug: "web-security",
        glyph: Glyph::Lock,
        title: "Web Security",
        description: "Protect your website and user data with advanced security measures and best practices.",
        tags: &["SSL Certificates", "Security Audits", "Data Encryption", "Compliance"],
    },
];

pub const PORTFOLIO_CATEGORIES: &[&str] = &[
    ALL_CATEGORIES,
    "Web Design",
    "E-Commerce",
    "Mobile Apps",
    "Branding",
];

pub const PROJECTS: &[Project] = &[
    Project {
        slug: "modern-e-commerce-platform",
        title: "Modern E-Commerce Platform",
        description: "A full-featured online store with custom product pages and seamless checkout.",
        image: ImageRef("https://images.pexels.com/photos/6956183/pexels-photo-6956183.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        category: "E-Commerce",
        tags: &["Next.js", "Stripe", "Tailwind CSS"],
    },
    Project {
        slug: "corporate-website-redesign",
        title: "Corporate Website Redesign",
        description: "Complete overhaul of a financial services website with improved UI/UX.",
        image: ImageRef("https://images.pexels.com/photos/5989933/pexels-photo-5989933.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        category: "Web Design",
        tags: &["React", "Framer Motion", "TypeScript"],
    },
    Project {
        slug: "healthcare-mobile-application",
        title: "Healthcare Mobile Application",
        description: "Patient-doctor communication app with appointment scheduling and telemedicine.",
        image: ImageRef("https://images.pexels.com/photos/5417664/pexels-photo-5417664.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        category: "Mobile Apps",
        tags: &["React Native", "Firebase", "Redux"],
    },
    Project {
        slug: "saas-dashboard",
        title: "SaaS Dashboard",
        description: "Comprehensive analytics dashboard for a B2B SaaS platform.",
        image: ImageRef("https://images.pexels.com/photos/5483071/pexels-photo-5483071.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        category: "Web Design",
        tags: &["Vue.js", "D3.js", "Tailwind"],
    },
    Project {
        slug: "fitness-brand-identity",
        title: "Fitness Brand Identity",
        description: "Complete branding package including logo, website, and marketing materials.",
        image: ImageRef("https://images.pexels.com/photos/4397841/pexels-photo-4397841.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        category: "Branding",
        tags: &["Figma", "Illustrator", "Web Design"],
    },
    Project {
        slug: "food-delivery-app",
        title: "Food Delivery App",
        description: "Mobile application for a local restaurant chain with real-time order tracking.",
        image: ImageRef("https://images.pexels.com/photos/5053848/pexels-photo-5053848.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        category: "Mobile Apps",
        tags: &["Flutter", "Node.js", "Google Maps API"],
    },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        number: "01",
        glyph: Glyph::Search,
        title: "Discovery & Research",
        description: "We start by understanding your business, goals, target audience, and competition to inform our strategy.",
    },
    ProcessStep {
        number: "02",
        glyph: Glyph::Lightbulb,
        title: "Strategy & Planning",
        description: "Based on research, we develop a comprehensive strategy and project roadmap with clear milestones.",
    },
    ProcessStep {
        number: "03",
        glyph: Glyph::Pencil,
        title: "Design & Wireframing",
        description: "We create wireframes and design mockups that align with your brand and provide optimal user experience.",
    },
    ProcessStep {
        number: "04",
        glyph: Glyph::Code,
        title: "Development & Testing",
        description: "Our developers bring the designs to life with clean, efficient code, followed by rigorous testing.",
    },
    ProcessStep {
        number: "05",
        glyph: Glyph::Zap,
        title: "Launch & Deployment",
        description: "After final approval, we deploy your project and ensure everything runs smoothly in the live environment.",
    },
    ProcessStep {
        number: "06",
        glyph: Glyph::BarChart,
        title: "Support & Growth",
        description: "We provide ongoing support and help you evolve your digital presence to meet changing business needs.",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        slug: "alex-morgan",
        name: "Alex Morgan",
        role: "Founder & CEO",
        image: ImageRef("https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        bio: "10+ years of experience in web development and digital strategy. Passionate about creating innovative digital solutions.",
    },
    TeamMember {
        slug: "sarah-johnson",
        name: "Sarah Johnson",
        role: "Creative Director",
        image: ImageRef("https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        bio: "Award-winning designer with a keen eye for aesthetics and user experience. Leads our design team with vision and precision.",
    },
    TeamMember {
        slug: "michael-chen",
        name: "Michael Chen",
        role: "Lead Developer",
        image: ImageRef("https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        bio: "Full-stack developer specializing in React, Node.js, and modern web technologies. Committed to writing clean, efficient code.",
    },
    TeamMember {
        slug: "emily-rodriguez",
        name: "Emily Rodriguez",
        role: "UX Designer",
        image: ImageRef("https://images.pexels.com/photos/762020/pexels-photo-762020.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        bio: "Focuses on creating intuitive user experiences through research, wireframing, and prototyping. HCI background from Stanford.",
    },
    TeamMember {
        slug: "david-wilson",
        name: "David Wilson",
        role: "Project Manager",
        image: ImageRef("https://images.pexels.com/photos/1181391/pexels-photo-1181391.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        bio: "Certified PMP with expertise in agile methodologies. Ensures projects are delivered on time and within scope.",
    },
    TeamMember {
        slug: "jessica-park",
        name: "Jessica Park",
        role: "Marketing Specialist",
        image: ImageRef("https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        bio: "Digital marketing expert specializing in SEO, content strategy, and analytics. Helps clients grow their online presence.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Working with PixelPerfect was a game-changer for our business. They transformed our outdated website into a stunning, high-performance platform that perfectly represents our brand.",
        name: "John Smith",
        title: "CEO",
        company: "TechStart Inc.",
        rating: 5,
    },
    Testimonial {
        quote: "The team at PixelPerfect exceeded our expectations in every way. Their attention to detail and commitment to quality is unmatched. Our e-commerce sales increased by 40% after launch.",
        name: "Amanda Chen",
        title: "Marketing Director",
        company: "FashionForward",
        rating: 5,
    },
    Testimonial {
        quote: "As a startup, we needed a website that could grow with us. PixelPerfect delivered a scalable solution that impresses our users and investors alike. Highly recommended!",
        name: "Mark Johnson",
        title: "Founder",
        company: "InnoVenture",
        rating: 5,
    },
    Testimonial {
        quote: "PixelPerfect's expertise in creating user-friendly interfaces completely transformed our application. Our user engagement metrics improved dramatically within weeks of launch.",
        name: "Sarah Williams",
        title: "Product Manager",
        company: "HealthTech Solutions",
        rating: 5,
    },
    Testimonial {
        quote: "We've worked with several web development agencies in the past, but none have matched the level of professionalism and technical expertise that PixelPerfect brings to the table.",
        name: "David Miller",
        title: "CTO",
        company: "Global Innovations",
        rating: 5,
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        glyph: Glyph::Mail,
        title: "Email Us",
        details: "hello@pixelperfect.dev",
        href: "mailto:hello@pixelperfect.dev",
    },
    ContactChannel {
        glyph: Glyph::Phone,
        title: "Call Us",
        details: "+1 (555) 123-4567",
        href: "tel:+15551234567",
    },
    ContactChannel {
        glyph: Glyph::MapPin,
        title: "Visit Us",
        details: "123 Tech Plaza, San Francisco, CA 94103",
        href: "https://maps.google.com",
    },
];

pub const AVAILABILITY_NOTE: &str = "We're available Monday through Friday, 9am to 6pm PST.";

pub const AVAILABILITY: &[Availability] = &[
    Availability {
        day: "Monday - Friday",
        hours: "9:00 AM - 6:00 PM",
    },
    Availability {
        day: "Saturday",
        hours: "By appointment",
    },
    Availability {
        day: "Sunday",
        hours: "Closed",
    },
];

pub const FOOTER_LINK_GROUPS: &[LinkGroup] = &[
    LinkGroup {
        heading: "Services",
        links: &[
            "Web Development",
            "UI/UX Design",
            "E-Commerce",
            "Mobile Apps",
            "SEO Optimization",
        ],
    },
    LinkGroup {
        heading: "Resources",
        links: &[
            "Blog",
            "Case Studies",
            "Documentation",
            "Help Center",
            "Privacy Policy",
            "Terms of Service",
        ],
    },
];

pub const FOOTER_LEGAL_LINKS: &[&str] = &["Privacy", "Terms", "Cookies", "Contact"];

pub const SERVICES_HEADING: SectionHeading = SectionHeading {
    badge: "Services",
    lead_in: "Transforming ideas into ",
    highlight: "digital reality",
    trailing: "",
    blurb: Some("Our comprehensive range of services is designed to help businesses of all sizes establish a strong online presence and achieve their digital goals."),
};

pub const PORTFOLIO_HEADING: SectionHeading = SectionHeading {
    badge: "Our Work",
    lead_in: "Recent ",
    highlight: "projects",
    trailing: " we're proud of",
    blurb: None,
};

pub const PROCESS_HEADING: SectionHeading = SectionHeading {
    badge: "Our Process",
    lead_in: "How we bring your ",
    highlight: "vision",
    trailing: " to life",
    blurb: Some("Our proven process ensures we deliver exceptional results that meet your objectives and exceed expectations."),
};

pub const TEAM_HEADING: SectionHeading = SectionHeading {
    badge: "Our Team",
    lead_in: "Meet the ",
    highlight: "talent",
    trailing: " behind our success",
    blurb: Some("Our diverse team of experts brings together skills, experience, and creativity to deliver exceptional results."),
};

pub const TESTIMONIALS_HEADING: SectionHeading = SectionHeading {
    badge: "Testimonials",
    lead_in: "What our ",
    highlight: "clients",
    trailing: " say about us",
    blurb: Some("Don't just take our word for it. Hear from some of our satisfied clients who have experienced our services firsthand."),
};

pub const CONTACT_HEADING: SectionHeading = SectionHeading {
    badge: "Contact Us",
    lead_in: "Ready to ",
    highlight: "transform",
    trailing: " your digital presence?",
    blurb: Some("Have a project in mind or want to learn more about our services? We'd love to hear from you."),
};

pub const HERO_HEADLINE: [&str; 4] = [
    "Creating ",
    "impactful",
    " digital experiences with ",
    "precision",
];

pub const NEWSLETTER_HEADING: &str = "Stay Updated";
pub const NEWSLETTER_PROMPT: &str = "Subscribe to our newsletter to get the latest updates.";
pub const NEWSLETTER_FINE_PRINT: &str =
    "By subscribing, you agree to our Terms of Service and Privacy Policy.";
pub const SOCIAL_LINKS: &[&str] = &["Twitter", "GitHub", "LinkedIn", "Instagram"];

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {BRAND_NAME}. All rights reserved.")
}
