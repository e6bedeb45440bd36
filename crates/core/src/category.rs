use serde::{Deserialize, Serialize};

use crate::models::Language;

/// The closed set of franchise-support topics. `Other` is the sentinel for
/// "no match" — classifier and ranker never report anything outside this enum.
///
/// Declaration order is the canonical catalog order; the similarity ranker
/// relies on it to break score ties deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    WhatIsRealtyplus,
    CountriesOperatingIn,
    FranchiseInclusions,
    FranchiseVsMaster,
    RealEstateExperienceReq,
    StartAloneOrTeam,
    OnboardingLaunchTime,
    SupportReceived,
    OperateInternationally,
    StepsToGetStarted,
    AreaExclusivity,
    MarketingAssistance,
    RecruitmentAssistance,
    TechnologyToolsOffered,
    ContactExpansionTeam,
    WhereCanIOpen,
    WhyChooseRealtyplus,
    ReceiveDocumentsBrochure,
    TimeDedicationRequired,
    PhysicalOfficeNeed,
    TrainingForTeam,
    ExpandToMultipleCities,
    VisitHeadquarters,
    GrowBeyondSales,
    MultipleLanguagesReq,
    MainRequirementsJoin,
    ContactOtherFranchisees,
    HowInternationalSystemWorks,
    GrowQuicklyPossible,
    Other,
}

impl Category {
    /// Every concrete category in catalog order, excluding `Other`.
    pub const ALL: [Category; 29] = [
        Category::WhatIsRealtyplus,
        Category::CountriesOperatingIn,
        Category::FranchiseInclusions,
        Category::FranchiseVsMaster,
        Category::RealEstateExperienceReq,
        Category::StartAloneOrTeam,
        Category::OnboardingLaunchTime,
        Category::SupportReceived,
        Category::OperateInternationally,
        Category::StepsToGetStarted,
        Category::AreaExclusivity,
        Category::MarketingAssistance,
        Category::RecruitmentAssistance,
        Category::TechnologyToolsOffered,
        Category::ContactExpansionTeam,
        Category::WhereCanIOpen,
        Category::WhyChooseRealtyplus,
        Category::ReceiveDocumentsBrochure,
        Category::TimeDedicationRequired,
        Category::PhysicalOfficeNeed,
        Category::TrainingForTeam,
        Category::ExpandToMultipleCities,
        Category::VisitHeadquarters,
        Category::GrowBeyondSales,
        Category::MultipleLanguagesReq,
        Category::MainRequirementsJoin,
        Category::ContactOtherFranchisees,
        Category::HowInternationalSystemWorks,
        Category::GrowQuicklyPossible,
    ];

    /// Uppercase wire label, as used in the catalog document and the
    /// classification exchange.
    pub fn label(self) -> &'static str {
        match self {
            Category::WhatIsRealtyplus => "WHAT_IS_REALTYPLUS",
            Category::CountriesOperatingIn => "COUNTRIES_OPERATING_IN",
            Category::FranchiseInclusions => "FRANCHISE_INCLUSIONS",
            Category::FranchiseVsMaster => "FRANCHISE_VS_MASTER",
            Category::RealEstateExperienceReq => "REAL_ESTATE_EXPERIENCE_REQ",
            Category::StartAloneOrTeam => "START_ALONE_OR_TEAM",
            Category::OnboardingLaunchTime => "ONBOARDING_LAUNCH_TIME",
            Category::SupportReceived => "SUPPORT_RECEIVED",
            Category::OperateInternationally => "OPERATE_INTERNATIONALLY",
            Category::StepsToGetStarted => "STEPS_TO_GET_STARTED",
            Category::AreaExclusivity => "AREA_EXCLUSIVITY",
            Category::MarketingAssistance => "MARKETING_ASSISTANCE",
            Category::RecruitmentAssistance => "RECRUITMENT_ASSISTANCE",
            Category::TechnologyToolsOffered => "TECHNOLOGY_TOOLS_OFFERED",
            Category::ContactExpansionTeam => "CONTACT_EXPANSION_TEAM",
            Category::WhereCanIOpen => "WHERE_CAN_I_OPEN",
            Category::WhyChooseRealtyplus => "WHY_CHOOSE_REALTYPLUS",
            Category::ReceiveDocumentsBrochure => "RECEIVE_DOCUMENTS_BROCHURE",
            Category::TimeDedicationRequired => "TIME_DEDICATION_REQUIRED",
            Category::PhysicalOfficeNeed => "PHYSICAL_OFFICE_NEED",
            Category::TrainingForTeam => "TRAINING_FOR_TEAM",
            Category::ExpandToMultipleCities => "EXPAND_TO_MULTIPLE_CITIES",
            Category::VisitHeadquarters => "VISIT_HEADQUARTERS",
            Category::GrowBeyondSales => "GROW_BEYOND_SALES",
            Category::MultipleLanguagesReq => "MULTIPLE_LANGUAGES_REQ",
            Category::MainRequirementsJoin => "MAIN_REQUIREMENTS_JOIN",
            Category::ContactOtherFranchisees => "CONTACT_OTHER_FRANCHISEES",
            Category::HowInternationalSystemWorks => "HOW_INTERNATIONAL_SYSTEM_WORKS",
            Category::GrowQuicklyPossible => "GROW_QUICKLY_POSSIBLE",
            Category::Other => "OTHER",
        }
    }

    /// Strict reverse of `label`. Anything else — including `OTHER` itself —
    /// is `None`, so malformed classifier output coerces to the sentinel at
    /// the call site.
    pub fn from_label(value: &str) -> Option<Self> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.label() == value)
    }

    /// Bilingual example phrases enumerated in the classification
    /// instruction.
    pub fn hint_phrases(self) -> &'static str {
        match self {
            Category::WhatIsRealtyplus => {
                "qué es RealtyPlus, what is RealtyPlus, información sobre la empresa, company information"
            }
            Category::CountriesOperatingIn => {
                "en qué países operan, where do you operate, dónde están, countries"
            }
            Category::FranchiseInclusions => {
                "qué incluye la franquicia, what is included, qué recibo, what do I get"
            }
            Category::FranchiseVsMaster => {
                "diferencia entre franquicia y master, difference between franchise and master"
            }
            Category::RealEstateExperienceReq => {
                "necesito experiencia, do I need experience, requisitos de experiencia"
            }
            Category::StartAloneOrTeam => {
                "puedo empezar solo, can I start alone, necesito equipo, do I need a team"
            }
            Category::OnboardingLaunchTime => {
                "cuánto tiempo para empezar, how long to start, tiempo de lanzamiento"
            }
            Category::SupportReceived => "qué apoyo recibo, what support do I get, ayuda",
            Category::OperateInternationally => {
                "puedo operar internacionalmente, can I work internationally, trabajo global"
            }
            Category::StepsToGetStarted => {
                "cómo empezar, how to start, pasos para comenzar, steps to begin"
            }
            Category::AreaExclusivity => {
                "exclusividad territorial, area exclusivity, territorio exclusivo"
            }
            Category::MarketingAssistance => {
                "ayuda de marketing, marketing help, publicidad, advertising support"
            }
            Category::RecruitmentAssistance => {
                "ayuda para reclutar, recruitment help, contratar equipo"
            }
            Category::TechnologyToolsOffered => {
                "herramientas tecnológicas, technology tools, plataformas digitales"
            }
            Category::ContactExpansionTeam => {
                "contactar, contact, hablar con alguien, speak with someone, agendar llamada, schedule call"
            }
            Category::WhereCanIOpen => {
                "dónde puedo abrir, where can I open, ubicaciones disponibles"
            }
            Category::WhyChooseRealtyplus => {
                "por qué elegir RealtyPlus, why choose RealtyPlus, ventajas, benefits"
            }
            Category::ReceiveDocumentsBrochure => {
                "recibir documentos, receive documents, folleto, brochure, información"
            }
            Category::TimeDedicationRequired => {
                "cuánto tiempo necesito dedicar, how much time required, dedicación"
            }
            Category::PhysicalOfficeNeed => {
                "necesito oficina física, do I need physical office, oficina"
            }
            Category::TrainingForTeam => {
                "capacitación, training, entrenamiento, formación para el equipo"
            }
            Category::ExpandToMultipleCities => {
                "expandir a más ciudades, expand to multiple cities, varias ubicaciones"
            }
            Category::VisitHeadquarters => "visitar oficinas, visit headquarters, conocer la sede",
            Category::GrowBeyondSales => {
                "crecer más allá de ventas, grow beyond sales, otros servicios"
            }
            Category::MultipleLanguagesReq => {
                "necesito hablar idiomas, need multiple languages, requisitos de idioma"
            }
            Category::MainRequirementsJoin => {
                "requisitos principales, main requirements, qué necesito para unirme"
            }
            Category::ContactOtherFranchisees => {
                "contactar otros franquiciados, contact other franchisees, testimonios"
            }
            Category::HowInternationalSystemWorks => {
                "cómo funciona el sistema internacional, how international system works"
            }
            Category::GrowQuicklyPossible => {
                "puedo crecer rápido, can I grow quickly, crecimiento rápido"
            }
            Category::Other => "",
        }
    }

    /// Keywords scored by the similarity ranker, matched as case-insensitive
    /// substrings of the question.
    pub fn similarity_keywords(self) -> &'static [&'static str] {
        match self {
            Category::WhatIsRealtyplus => &[
                "qué es",
                "what is",
                "información",
                "empresa",
                "company",
                "realtyplus",
            ],
            Category::CountriesOperatingIn => &[
                "países",
                "countries",
                "dónde",
                "where",
                "ubicación",
                "location",
                "operan",
            ],
            Category::FranchiseInclusions => &[
                "incluye",
                "included",
                "qué recibo",
                "what do i get",
                "beneficios",
                "benefits",
            ],
            Category::FranchiseVsMaster => {
                &["diferencia", "difference", "master", "franquicia vs"]
            }
            Category::RealEstateExperienceReq => {
                &["experiencia", "experience", "necesito", "requisitos"]
            }
            Category::StartAloneOrTeam => &["solo", "alone", "equipo", "team"],
            Category::OnboardingLaunchTime => {
                &["cuánto tiempo", "how long", "tiempo", "launch", "empezar"]
            }
            Category::SupportReceived => &["apoyo", "support", "ayuda", "help"],
            Category::OperateInternationally => &["internacional", "international", "global"],
            Category::StepsToGetStarted => {
                &["cómo empezar", "how to start", "pasos", "steps", "comenzar"]
            }
            Category::AreaExclusivity => {
                &["exclusividad", "exclusivity", "territorio", "territory"]
            }
            Category::MarketingAssistance => &["marketing", "publicidad", "advertising"],
            Category::RecruitmentAssistance => {
                &["reclutar", "recruitment", "contratar", "hiring"]
            }
            Category::TechnologyToolsOffered => {
                &["tecnología", "technology", "herramientas", "tools", "plataforma"]
            }
            Category::ContactExpansionTeam => {
                &["contactar", "contact", "hablar", "llamada", "call", "reunión"]
            }
            Category::WhereCanIOpen => &["dónde puedo", "where can", "abrir", "open"],
            Category::WhyChooseRealtyplus => {
                &["por qué", "why", "elegir", "choose", "ventajas"]
            }
            Category::ReceiveDocumentsBrochure => {
                &["documentos", "documents", "folleto", "brochure"]
            }
            Category::TimeDedicationRequired => {
                &["dedicación", "dedication", "tiempo dedicar"]
            }
            Category::PhysicalOfficeNeed => &["oficina", "office", "física", "physical"],
            Category::TrainingForTeam => {
                &["capacitación", "training", "entrenamiento", "formación"]
            }
            Category::ExpandToMultipleCities => &["expandir", "expand", "ciudades", "cities"],
            Category::VisitHeadquarters => &["visitar", "visit", "oficinas", "headquarters"],
            Category::GrowBeyondSales => &["crecer", "grow", "más allá", "beyond"],
            Category::MultipleLanguagesReq => &["idiomas", "languages"],
            Category::MainRequirementsJoin => {
                &["requisitos", "requirements", "unirme", "join"]
            }
            Category::ContactOtherFranchisees => {
                &["franquiciados", "franchisees", "testimonios"]
            }
            Category::HowInternationalSystemWorks => {
                &["sistema", "system", "funciona", "works"]
            }
            Category::GrowQuicklyPossible => &["rápido", "quickly", "rápidamente"],
            Category::Other => &[],
        }
    }

    /// Friendly name shown in suggestion lists.
    pub fn display_name(self, language: Language) -> &'static str {
        match language {
            Language::English => self.display_name_en(),
            Language::Spanish => self.display_name_es(),
        }
    }

    fn display_name_en(self) -> &'static str {
        match self {
            Category::WhatIsRealtyplus => "What is RealtyPlus?",
            Category::CountriesOperatingIn => "What countries do you operate in?",
            Category::FranchiseInclusions => "What does the franchise include?",
            Category::FranchiseVsMaster => "Difference between franchise and master franchise",
            Category::RealEstateExperienceReq => "Real estate experience required",
            Category::StartAloneOrTeam => "Can I start alone or do I need a team?",
            Category::OnboardingLaunchTime => "Time to get started",
            Category::SupportReceived => "Support I will receive",
            Category::OperateInternationally => "International operations",
            Category::StepsToGetStarted => "Steps to get started",
            Category::AreaExclusivity => "Area exclusivity",
            Category::MarketingAssistance => "Marketing assistance",
            Category::RecruitmentAssistance => "Recruitment assistance",
            Category::TechnologyToolsOffered => "Technology tools offered",
            Category::ContactExpansionTeam => "Contact the expansion team",
            Category::WhereCanIOpen => "Where can I open?",
            Category::WhyChooseRealtyplus => "Why choose RealtyPlus?",
            Category::ReceiveDocumentsBrochure => "Receive documents/brochure",
            Category::TimeDedicationRequired => "Time dedication required",
            Category::PhysicalOfficeNeed => "Physical office requirement",
            Category::TrainingForTeam => "Training for the team",
            Category::ExpandToMultipleCities => "Expand to multiple cities",
            Category::VisitHeadquarters => "Visit headquarters",
            Category::GrowBeyondSales => "Grow beyond sales",
            Category::MultipleLanguagesReq => "Multiple languages requirement",
            Category::MainRequirementsJoin => "Main requirements to join",
            Category::ContactOtherFranchisees => "Contact other franchisees",
            Category::HowInternationalSystemWorks => "How the international system works",
            Category::GrowQuicklyPossible => "Possibility of growing quickly",
            Category::Other => "Other",
        }
    }

    fn display_name_es(self) -> &'static str {
        match self {
            Category::WhatIsRealtyplus => "¿Qué es RealtyPlus?",
            Category::CountriesOperatingIn => "¿En qué países operan?",
            Category::FranchiseInclusions => "¿Qué incluye la franquicia?",
            Category::FranchiseVsMaster => "Diferencia entre franquicia y master franquicia",
            Category::RealEstateExperienceReq => "Experiencia en bienes raíces requerida",
            Category::StartAloneOrTeam => "¿Puedo empezar solo o necesito un equipo?",
            Category::OnboardingLaunchTime => "Tiempo para empezar",
            Category::SupportReceived => "Apoyo que recibiré",
            Category::OperateInternationally => "Operaciones internacionales",
            Category::StepsToGetStarted => "Pasos para comenzar",
            Category::AreaExclusivity => "Exclusividad territorial",
            Category::MarketingAssistance => "Ayuda de marketing",
            Category::RecruitmentAssistance => "Ayuda de reclutamiento",
            Category::TechnologyToolsOffered => "Herramientas tecnológicas ofrecidas",
            Category::ContactExpansionTeam => "Contactar al equipo de expansión",
            Category::WhereCanIOpen => "¿Dónde puedo abrir?",
            Category::WhyChooseRealtyplus => "¿Por qué elegir RealtyPlus?",
            Category::ReceiveDocumentsBrochure => "Recibir documentos/folleto",
            Category::TimeDedicationRequired => "Tiempo de dedicación requerido",
            Category::PhysicalOfficeNeed => "Requisito de oficina física",
            Category::TrainingForTeam => "Capacitación para el equipo",
            Category::ExpandToMultipleCities => "Expandir a múltiples ciudades",
            Category::VisitHeadquarters => "Visitar la sede",
            Category::GrowBeyondSales => "Crecer más allá de las ventas",
            Category::MultipleLanguagesReq => "Requisito de múltiples idiomas",
            Category::MainRequirementsJoin => "Requisitos principales para unirse",
            Category::ContactOtherFranchisees => "Contactar a otros franquiciados",
            Category::HowInternationalSystemWorks => "Cómo funciona el sistema internacional",
            Category::GrowQuicklyPossible => "Posibilidad de crecer rápidamente",
            Category::Other => "Otro",
        }
    }
}
