//! Shared semantic tables for the member portal content engine.
//!
//! This crate centralizes the closed vocabularies used by both the runtime
//! (`mdp-content`) and the command-line tools (`mdp-cli`): placeholder kinds,
//! token identifiers and CMS block kinds. Keeping them in one place avoids
//! drift between what the injector understands and what `mdp check` accepts.

// =============================================================================
// Placeholder kinds
// =============================================================================

/// The kind segment of a `[[kind:argument]]` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlaceholderKind {
    Token,
    Label,
    Modal,
    Tooltip,
    Message,
    Button,
    Timer,
    Icon,
    Badge,
    DataCurrency,
    DataDate,
    DataText,
    DataTimeTo,
}

impl PlaceholderKind {
    /// Every placeholder kind, in rule registration order.
    pub const ALL: [PlaceholderKind; 13] = [
        PlaceholderKind::Token,
        PlaceholderKind::Label,
        PlaceholderKind::Modal,
        PlaceholderKind::Tooltip,
        PlaceholderKind::Message,
        PlaceholderKind::Button,
        PlaceholderKind::Timer,
        PlaceholderKind::Icon,
        PlaceholderKind::Badge,
        PlaceholderKind::DataCurrency,
        PlaceholderKind::DataDate,
        PlaceholderKind::DataText,
        PlaceholderKind::DataTimeTo,
    ];

    /// The literal used between `[[` and `:`.
    pub fn as_str(self) -> &'static str {
        match self {
            PlaceholderKind::Token => "token",
            PlaceholderKind::Label => "label",
            PlaceholderKind::Modal => "modal",
            PlaceholderKind::Tooltip => "tooltip",
            PlaceholderKind::Message => "message",
            PlaceholderKind::Button => "button",
            PlaceholderKind::Timer => "timer",
            PlaceholderKind::Icon => "icon",
            PlaceholderKind::Badge => "badge",
            PlaceholderKind::DataCurrency => "data-currency",
            PlaceholderKind::DataDate => "data-date",
            PlaceholderKind::DataText => "data-text",
            PlaceholderKind::DataTimeTo => "data-timeto",
        }
    }

    /// Directive markers are replaced by DOM placeholder spans, never by text.
    pub fn is_directive(self) -> bool {
        matches!(
            self,
            PlaceholderKind::Modal
                | PlaceholderKind::Tooltip
                | PlaceholderKind::Message
                | PlaceholderKind::Button
                | PlaceholderKind::Timer
                | PlaceholderKind::Icon
                | PlaceholderKind::Badge
        )
    }

    /// Data-binding markers address a value path in a data tree.
    pub fn is_data_binding(self) -> bool {
        matches!(
            self,
            PlaceholderKind::DataCurrency
                | PlaceholderKind::DataDate
                | PlaceholderKind::DataText
                | PlaceholderKind::DataTimeTo
        )
    }
}

/// Resolve the kind segment of a placeholder.
///
/// Matching is exact: CMS markers are case-sensitive.
pub fn resolve_placeholder_kind(name: &str) -> Option<PlaceholderKind> {
    PlaceholderKind::ALL
        .into_iter()
        .find(|kind| kind.as_str() == name)
}

// =============================================================================
// Token identifiers
// =============================================================================

/// A named fact available to `[[token:name]]` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenId {
    CurrentDate,
    TenantName,
    Title,
    Forenames,
    Surname,
    Name,
    DateOfBirth,
    Age,
    AgeText,
    InsuranceNumber,
    ReferenceNumber,
    Email,
    PhoneNumber,
    MobilePhoneNumber,
    Address,
    AddressHtml,
    PostCode,
    SchemeName,
    SchemeCode,
    Category,
    MembershipStatus,
    DateJoinedScheme,
    PensionableServiceStartDate,
    PensionableService,
    NormalRetirementDate,
    NormalRetirementAge,
    TimeToNormalRetirement,
    TargetRetirementDate,
    TargetRetirementAge,
    TimeToTargetRetirement,
    EarliestRetirementDate,
    EarliestRetirementAge,
    LatestRetirementDate,
    LatestRetirementAge,
    SelectedQuoteName,
    TotalPension,
    TotalLumpSum,
    TotalFundValue,
    TransferValue,
    GuaranteedTransferValue,
    TransferQuoteExpiryDate,
    LifetimeAllowancePercentage,
    RetirementApplicationExpiryDate,
    RetirementApplicationSubmissionDate,
    TransferApplicationSubmissionDate,
    BereavementReference,
    DeceasedName,
    DateOfDeath,
    ReporterName,
    ReporterEmail,
}

impl TokenId {
    /// Every token id, in table order.
    pub const ALL: [TokenId; 50] = [
        TokenId::CurrentDate,
        TokenId::TenantName,
        TokenId::Title,
        TokenId::Forenames,
        TokenId::Surname,
        TokenId::Name,
        TokenId::DateOfBirth,
        TokenId::Age,
        TokenId::AgeText,
        TokenId::InsuranceNumber,
        TokenId::ReferenceNumber,
        TokenId::Email,
        TokenId::PhoneNumber,
        TokenId::MobilePhoneNumber,
        TokenId::Address,
        TokenId::AddressHtml,
        TokenId::PostCode,
        TokenId::SchemeName,
        TokenId::SchemeCode,
        TokenId::Category,
        TokenId::MembershipStatus,
        TokenId::DateJoinedScheme,
        TokenId::PensionableServiceStartDate,
        TokenId::PensionableService,
        TokenId::NormalRetirementDate,
        TokenId::NormalRetirementAge,
        TokenId::TimeToNormalRetirement,
        TokenId::TargetRetirementDate,
        TokenId::TargetRetirementAge,
        TokenId::TimeToTargetRetirement,
        TokenId::EarliestRetirementDate,
        TokenId::EarliestRetirementAge,
        TokenId::LatestRetirementDate,
        TokenId::LatestRetirementAge,
        TokenId::SelectedQuoteName,
        TokenId::TotalPension,
        TokenId::TotalLumpSum,
        TokenId::TotalFundValue,
        TokenId::TransferValue,
        TokenId::GuaranteedTransferValue,
        TokenId::TransferQuoteExpiryDate,
        TokenId::LifetimeAllowancePercentage,
        TokenId::RetirementApplicationExpiryDate,
        TokenId::RetirementApplicationSubmissionDate,
        TokenId::TransferApplicationSubmissionDate,
        TokenId::BereavementReference,
        TokenId::DeceasedName,
        TokenId::DateOfDeath,
        TokenId::ReporterName,
        TokenId::ReporterEmail,
    ];

    /// The name used inside `[[token:...]]`.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenId::CurrentDate => "current-date",
            TokenId::TenantName => "tenant-name",
            TokenId::Title => "title",
            TokenId::Forenames => "forenames",
            TokenId::Surname => "surname",
            TokenId::Name => "name",
            TokenId::DateOfBirth => "date-of-birth",
            TokenId::Age => "age",
            TokenId::AgeText => "age-text",
            TokenId::InsuranceNumber => "insurance-number",
            TokenId::ReferenceNumber => "reference-number",
            TokenId::Email => "email",
            TokenId::PhoneNumber => "phone-number",
            TokenId::MobilePhoneNumber => "mobile-phone-number",
            TokenId::Address => "address",
            TokenId::AddressHtml => "address-html",
            TokenId::PostCode => "post-code",
            TokenId::SchemeName => "scheme-name",
            TokenId::SchemeCode => "scheme-code",
            TokenId::Category => "category",
            TokenId::MembershipStatus => "membership-status",
            TokenId::DateJoinedScheme => "date-joined-scheme",
            TokenId::PensionableServiceStartDate => "pensionable-service-start-date",
            TokenId::PensionableService => "pensionable-service",
            TokenId::NormalRetirementDate => "normal-retirement-date",
            TokenId::NormalRetirementAge => "normal-retirement-age",
            TokenId::TimeToNormalRetirement => "time-to-normal-retirement",
            TokenId::TargetRetirementDate => "target-retirement-date",
            TokenId::TargetRetirementAge => "target-retirement-age",
            TokenId::TimeToTargetRetirement => "time-to-target-retirement",
            TokenId::EarliestRetirementDate => "earliest-retirement-date",
            TokenId::EarliestRetirementAge => "earliest-retirement-age",
            TokenId::LatestRetirementDate => "latest-retirement-date",
            TokenId::LatestRetirementAge => "latest-retirement-age",
            TokenId::SelectedQuoteName => "selected-quote-name",
            TokenId::TotalPension => "total-pension",
            TokenId::TotalLumpSum => "total-lump-sum",
            TokenId::TotalFundValue => "total-fund-value",
            TokenId::TransferValue => "transfer-value",
            TokenId::GuaranteedTransferValue => "guaranteed-transfer-value",
            TokenId::TransferQuoteExpiryDate => "transfer-quote-expiry-date",
            TokenId::LifetimeAllowancePercentage => "lifetime-allowance-percentage",
            TokenId::RetirementApplicationExpiryDate => "retirement-application-expiry-date",
            TokenId::RetirementApplicationSubmissionDate => {
                "retirement-application-submission-date"
            }
            TokenId::TransferApplicationSubmissionDate => "transfer-application-submission-date",
            TokenId::BereavementReference => "bereavement-reference",
            TokenId::DeceasedName => "deceased-name",
            TokenId::DateOfDeath => "date-of-death",
            TokenId::ReporterName => "reporter-name",
            TokenId::ReporterEmail => "reporter-email",
        }
    }
}

/// Resolve a token name, accepting the legacy camelCase spellings still found
/// in older CMS entries.
pub fn resolve_token(name: &str) -> Option<TokenId> {
    let canonical = canonicalize_token_alias(name);
    TokenId::ALL.into_iter().find(|id| id.as_str() == canonical)
}

/// Accepted token names, for diagnostics and typo suggestions.
pub fn accepted_token_names() -> Vec<&'static str> {
    TokenId::ALL.into_iter().map(TokenId::as_str).collect()
}

fn canonicalize_token_alias(name: &str) -> &str {
    match name {
        "userName" | "fullName" => "name",
        "dateOfBirth" | "dob" => "date-of-birth",
        "email-address" => "email",
        "nino" => "insurance-number",
        "tenant" => "tenant-name",
        "today" => "current-date",
        other => other,
    }
}

// =============================================================================
// CMS block kinds
// =============================================================================

/// Broad grouping of block kinds; each family shares one render handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFamily {
    /// Authored rich text: every text element goes through the HTML injector.
    Content,
    /// Summary items rendered against the page's quote tree.
    Summary,
    /// Interactive widgets bound to quote or member data.
    Widget,
    /// Document listing, upload and download.
    Documents,
    /// Journey step chrome.
    Journey,
    /// Forms keyed by `formKey`.
    Form,
}

/// A CMS block kind, keyed by the block's `type` or `formKey` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    ContentHtml,
    ContentBlock,
    Heading,
    Message,
    Accordion,
    AccordionGroup,
    Faq,
    ContactUs,
    Banner,
    HeroBanner,
    Card,
    CardGroup,
    InfoTile,
    Footer,
    Summary,
    RetirementQuoteSummary,
    TransferSummary,
    PensionTranchesTable,
    LumpSumSummary,
    QuoteOptionsList,
    QuoteSelection,
    RetirementDatePicker,
    RetirementCalculator,
    TransferCalculator,
    PensionChart,
    Timeline,
    CountdownTimer,
    DocumentList,
    DocumentUpload,
    DocumentDownload,
    JourneyStepList,
    JourneyProgress,
    JourneyNavigation,
    CheckboxList,
    JourneySubmit,
    FastForward,
    ContactDetailsForm,
    EmailForm,
    PhoneForm,
    AddressForm,
    BankDetailsForm,
    BeneficiariesForm,
    RetirementDateForm,
    LumpSumForm,
    TransferAdviserForm,
    TransferSchemeForm,
    BereavementDeceasedForm,
    BereavementReporterForm,
    BereavementNextOfKinForm,
    BereavementEmailVerificationForm,
    QuestionForm,
    LoginForm,
    /// A literal the portal does not know. Rendered as a diagnostic placeholder.
    Unknown,
}

impl BlockKind {
    /// The CMS literal for this kind. `Unknown` has none.
    pub fn as_str(self) -> Option<&'static str> {
        let literal = match self {
            BlockKind::ContentHtml => "Content HTML block",
            BlockKind::ContentBlock => "Content block",
            BlockKind::Heading => "Heading",
            BlockKind::Message => "Message",
            BlockKind::Accordion => "Accordion",
            BlockKind::AccordionGroup => "Accordion group",
            BlockKind::Faq => "FAQ block",
            BlockKind::ContactUs => "Contact us block",
            BlockKind::Banner => "Banner",
            BlockKind::HeroBanner => "Hero banner",
            BlockKind::Card => "Card",
            BlockKind::CardGroup => "Card group",
            BlockKind::InfoTile => "Info tile",
            BlockKind::Footer => "Footer",
            BlockKind::Summary => "Summary block",
            BlockKind::RetirementQuoteSummary => "Retirement quote summary",
            BlockKind::TransferSummary => "Transfer summary",
            BlockKind::PensionTranchesTable => "Pension tranches table",
            BlockKind::LumpSumSummary => "Lump sum summary",
            BlockKind::QuoteOptionsList => "Retirement options list",
            BlockKind::QuoteSelection => "Quote selection",
            BlockKind::RetirementDatePicker => "Retirement date picker",
            BlockKind::RetirementCalculator => "Retirement calculator",
            BlockKind::TransferCalculator => "Transfer calculator",
            BlockKind::PensionChart => "Pension chart",
            BlockKind::Timeline => "Timeline",
            BlockKind::CountdownTimer => "Countdown timer",
            BlockKind::DocumentList => "Document list",
            BlockKind::DocumentUpload => "Document upload",
            BlockKind::DocumentDownload => "Document download",
            BlockKind::JourneyStepList => "Journey step list",
            BlockKind::JourneyProgress => "Journey progress",
            BlockKind::JourneyNavigation => "Journey navigation buttons",
            BlockKind::CheckboxList => "Checkbox list",
            BlockKind::JourneySubmit => "Journey submit",
            BlockKind::FastForward => "Fast forward",
            BlockKind::ContactDetailsForm => "contact_details_form",
            BlockKind::EmailForm => "email_form",
            BlockKind::PhoneForm => "phone_form",
            BlockKind::AddressForm => "address_form",
            BlockKind::BankDetailsForm => "bank_details_form",
            BlockKind::BeneficiariesForm => "nominated_beneficiaries_form",
            BlockKind::RetirementDateForm => "retirement_date_form",
            BlockKind::LumpSumForm => "lump_sum_form",
            BlockKind::TransferAdviserForm => "transfer_financial_adviser_form",
            BlockKind::TransferSchemeForm => "transfer_pension_scheme_form",
            BlockKind::BereavementDeceasedForm => "bereavement_deceased_details_form",
            BlockKind::BereavementReporterForm => "bereavement_reporter_details_form",
            BlockKind::BereavementNextOfKinForm => "bereavement_next_of_kin_form",
            BlockKind::BereavementEmailVerificationForm => "bereavement_email_verification_form",
            BlockKind::QuestionForm => "question_form",
            BlockKind::LoginForm => "login_form",
            BlockKind::Unknown => return None,
        };
        Some(literal)
    }

    /// The family whose handler renders this kind. `Unknown` has none.
    pub fn family(self) -> Option<BlockFamily> {
        let family = match self {
            BlockKind::ContentHtml
            | BlockKind::ContentBlock
            | BlockKind::Heading
            | BlockKind::Message
            | BlockKind::Accordion
            | BlockKind::AccordionGroup
            | BlockKind::Faq
            | BlockKind::ContactUs
            | BlockKind::Banner
            | BlockKind::HeroBanner
            | BlockKind::Card
            | BlockKind::CardGroup
            | BlockKind::InfoTile
            | BlockKind::Footer => BlockFamily::Content,
            BlockKind::Summary
            | BlockKind::RetirementQuoteSummary
            | BlockKind::TransferSummary
            | BlockKind::PensionTranchesTable
            | BlockKind::LumpSumSummary => BlockFamily::Summary,
            BlockKind::QuoteOptionsList
            | BlockKind::QuoteSelection
            | BlockKind::RetirementDatePicker
            | BlockKind::RetirementCalculator
            | BlockKind::TransferCalculator
            | BlockKind::PensionChart
            | BlockKind::Timeline
            | BlockKind::CountdownTimer => BlockFamily::Widget,
            BlockKind::DocumentList | BlockKind::DocumentUpload | BlockKind::DocumentDownload => {
                BlockFamily::Documents
            }
            BlockKind::JourneyStepList
            | BlockKind::JourneyProgress
            | BlockKind::JourneyNavigation
            | BlockKind::CheckboxList
            | BlockKind::JourneySubmit
            | BlockKind::FastForward => BlockFamily::Journey,
            BlockKind::ContactDetailsForm
            | BlockKind::EmailForm
            | BlockKind::PhoneForm
            | BlockKind::AddressForm
            | BlockKind::BankDetailsForm
            | BlockKind::BeneficiariesForm
            | BlockKind::RetirementDateForm
            | BlockKind::LumpSumForm
            | BlockKind::TransferAdviserForm
            | BlockKind::TransferSchemeForm
            | BlockKind::BereavementDeceasedForm
            | BlockKind::BereavementReporterForm
            | BlockKind::BereavementNextOfKinForm
            | BlockKind::BereavementEmailVerificationForm
            | BlockKind::QuestionForm
            | BlockKind::LoginForm => BlockFamily::Form,
            BlockKind::Unknown => return None,
        };
        Some(family)
    }
}

/// Every known block kind. `Unknown` is not listed.
pub const KNOWN_BLOCK_KINDS: [BlockKind; 52] = [
    BlockKind::ContentHtml,
    BlockKind::ContentBlock,
    BlockKind::Heading,
    BlockKind::Message,
    BlockKind::Accordion,
    BlockKind::AccordionGroup,
    BlockKind::Faq,
    BlockKind::ContactUs,
    BlockKind::Banner,
    BlockKind::HeroBanner,
    BlockKind::Card,
    BlockKind::CardGroup,
    BlockKind::InfoTile,
    BlockKind::Footer,
    BlockKind::Summary,
    BlockKind::RetirementQuoteSummary,
    BlockKind::TransferSummary,
    BlockKind::PensionTranchesTable,
    BlockKind::LumpSumSummary,
    BlockKind::QuoteOptionsList,
    BlockKind::QuoteSelection,
    BlockKind::RetirementDatePicker,
    BlockKind::RetirementCalculator,
    BlockKind::TransferCalculator,
    BlockKind::PensionChart,
    BlockKind::Timeline,
    BlockKind::CountdownTimer,
    BlockKind::DocumentList,
    BlockKind::DocumentUpload,
    BlockKind::DocumentDownload,
    BlockKind::JourneyStepList,
    BlockKind::JourneyProgress,
    BlockKind::JourneyNavigation,
    BlockKind::CheckboxList,
    BlockKind::JourneySubmit,
    BlockKind::FastForward,
    BlockKind::ContactDetailsForm,
    BlockKind::EmailForm,
    BlockKind::PhoneForm,
    BlockKind::AddressForm,
    BlockKind::BankDetailsForm,
    BlockKind::BeneficiariesForm,
    BlockKind::RetirementDateForm,
    BlockKind::LumpSumForm,
    BlockKind::TransferAdviserForm,
    BlockKind::TransferSchemeForm,
    BlockKind::BereavementDeceasedForm,
    BlockKind::BereavementReporterForm,
    BlockKind::BereavementNextOfKinForm,
    BlockKind::BereavementEmailVerificationForm,
    BlockKind::QuestionForm,
    BlockKind::LoginForm,
];

/// Resolve a block's `formKey` (preferred when present) or `type` literal.
///
/// Never fails: literals the portal does not know become `BlockKind::Unknown`.
pub fn resolve_block_kind(block_type: &str, form_key: Option<&str>) -> BlockKind {
    form_key
        .and_then(lookup_block_literal)
        .or_else(|| lookup_block_literal(canonicalize_block_alias(block_type)))
        .unwrap_or(BlockKind::Unknown)
}

fn lookup_block_literal(literal: &str) -> Option<BlockKind> {
    KNOWN_BLOCK_KINDS
        .into_iter()
        .find(|kind| kind.as_str() == Some(literal))
}

fn canonicalize_block_alias(block_type: &str) -> &str {
    match block_type {
        "HTML block" | "Rich text" => "Content HTML block",
        "Summary" => "Summary block",
        "Alert" | "Notification" => "Message",
        "Options list" => "Retirement options list",
        other => other,
    }
}
