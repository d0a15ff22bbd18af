// crates/core/src/types.rs
//! Typed record model for the exhibition corpus.
//!
//! The CSV boundary is the only place where fields are addressed by their
//! Korean column headers; past ingestion everything goes through the closed
//! [`Field`] vocabulary and the named optional fields on the record structs.

use serde::{Deserialize, Serialize};

/// Reserved title column of the reference sheet.
pub const TITLE_COLUMN: &str = "전시 제목";

/// Exhibition type column (0 = special exhibitions, excluded from comparison).
pub const TYPE_COLUMN: &str = "전시 유형";

/// Closed vocabulary of numeric fields: the ingested columns plus the five
/// derived ratio fields computed by [`crate::derived`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    DurationDays,
    ArtistsTotal,
    BudgetTotal,
    BudgetExhibition,
    BudgetAncillary,
    RevenueTotal,
    RevenueTickets,
    VisitorsTotal,
    VisitorsDailyAvg,
    VisitorsPaid,
    VisitorsFree,
    VisitorsStudent,
    VisitorsGroup,
    VisitorsArtPass,
    StaffTotal,
    ProgramCount,
    ProgramSessions,
    ProgramParticipants,
    OpeningAttendance,
    ArtworksTotal,
    ArtworksPainting,
    ArtworksSculpture,
    ArtworksPhoto,
    ArtworksInstallation,
    ArtworksMedia,
    ArtworksOther,
    PressCount,
    SnsPosts,
    // Derived ratio fields (no CSV column; filled by the enrichment pass)
    CostPerVisitor,
    RevenueToBudget,
    PaidRatio,
    ProgramParticipation,
    VisitorsPerPress,
}

impl Field {
    /// Every ingested (non-derived) field, in sheet order.
    pub const INGESTED: &'static [Field] = &[
        Field::DurationDays,
        Field::ArtistsTotal,
        Field::BudgetTotal,
        Field::BudgetExhibition,
        Field::BudgetAncillary,
        Field::RevenueTotal,
        Field::RevenueTickets,
        Field::VisitorsTotal,
        Field::VisitorsDailyAvg,
        Field::VisitorsPaid,
        Field::VisitorsFree,
        Field::VisitorsStudent,
        Field::VisitorsGroup,
        Field::VisitorsArtPass,
        Field::StaffTotal,
        Field::ProgramCount,
        Field::ProgramSessions,
        Field::ProgramParticipants,
        Field::OpeningAttendance,
        Field::ArtworksTotal,
        Field::ArtworksPainting,
        Field::ArtworksSculpture,
        Field::ArtworksPhoto,
        Field::ArtworksInstallation,
        Field::ArtworksMedia,
        Field::ArtworksOther,
        Field::PressCount,
        Field::SnsPosts,
    ];

    /// CSV column header, `None` for derived fields.
    pub fn column(&self) -> Option<&'static str> {
        match self {
            Field::DurationDays => Some("전시 일수"),
            Field::ArtistsTotal => Some("참여 작가 수_총(팀)"),
            Field::BudgetTotal => Some("총 사용 예산"),
            Field::BudgetExhibition => Some("전시 사용 예산"),
            Field::BudgetAncillary => Some("부대 사용 예산"),
            Field::RevenueTotal => Some("총수입"),
            Field::RevenueTickets => Some("입장 수입"),
            Field::VisitorsTotal => Some("총 관객수"),
            Field::VisitorsDailyAvg => Some("일평균 관객수"),
            Field::VisitorsPaid => Some("유료 관객수"),
            Field::VisitorsFree => Some("무료/초대 관객수"),
            Field::VisitorsStudent => Some("학생 관객수(만 24세 이하)"),
            Field::VisitorsGroup => Some("단체 관객수"),
            Field::VisitorsArtPass => Some("예술인패스 관객수"),
            Field::StaffTotal => Some("운영 인력_총"),
            Field::ProgramCount => Some("프로그램 총 수"),
            Field::ProgramSessions => Some("프로그램 총 회차"),
            Field::ProgramParticipants => Some("프로그램 참여 인원"),
            Field::OpeningAttendance => Some("오프닝 참석 인원"),
            Field::ArtworksTotal => Some("출품 작품 수_총"),
            Field::ArtworksPainting => Some("출품 작품 수_회화"),
            Field::ArtworksSculpture => Some("출품 작품 수_조각"),
            Field::ArtworksPhoto => Some("출품 작품 수_사진"),
            Field::ArtworksInstallation => Some("출품 작품 수_설치"),
            Field::ArtworksMedia => Some("출품 작품 수_미디어"),
            Field::ArtworksOther => Some("출품 작품 수_기타"),
            Field::PressCount => Some("언론 보도 건수"),
            Field::SnsPosts => Some("SNS 게시 건수"),
            Field::CostPerVisitor
            | Field::RevenueToBudget
            | Field::PaidRatio
            | Field::ProgramParticipation
            | Field::VisitorsPerPress => None,
        }
    }

    /// Display label, used verbatim in generated sentences and as the
    /// insight's metric name.
    pub fn label(&self) -> &'static str {
        match self {
            Field::DurationDays => "전시 일수",
            Field::ArtistsTotal => "참여 작가 수",
            Field::BudgetTotal => "총 사용 예산",
            Field::BudgetExhibition => "전시 사용 예산",
            Field::BudgetAncillary => "부대 사용 예산",
            Field::RevenueTotal => "총수입",
            Field::RevenueTickets => "입장 수입",
            Field::VisitorsTotal => "총 관객수",
            Field::VisitorsDailyAvg => "일평균 관객수",
            Field::VisitorsPaid => "유료 관객수",
            Field::VisitorsFree => "무료/초대 관객수",
            Field::VisitorsStudent => "학생 관객수",
            Field::VisitorsGroup => "단체 관객수",
            Field::VisitorsArtPass => "예술인패스 관객수",
            Field::StaffTotal => "운영 인력",
            Field::ProgramCount => "프로그램 수",
            Field::ProgramSessions => "프로그램 회차",
            Field::ProgramParticipants => "프로그램 참여 인원",
            Field::OpeningAttendance => "오프닝 참석 인원",
            Field::ArtworksTotal => "출품 작품 수",
            Field::ArtworksPainting => "회화 작품 수",
            Field::ArtworksSculpture => "조각 작품 수",
            Field::ArtworksPhoto => "사진 작품 수",
            Field::ArtworksInstallation => "설치 작품 수",
            Field::ArtworksMedia => "미디어 작품 수",
            Field::ArtworksOther => "기타 작품 수",
            Field::PressCount => "언론 보도 건수",
            Field::SnsPosts => "SNS 게시 건수",
            Field::CostPerVisitor => "관객당 비용",
            Field::RevenueToBudget => "예산 회수율",
            Field::PaidRatio => "유료 관객 비율",
            Field::ProgramParticipation => "프로그램 참여율",
            Field::VisitorsPerPress => "보도건당 관객",
        }
    }

    /// Unit suffix for formatted values ("" for ratios, rendered as %).
    pub fn unit(&self) -> &'static str {
        match self {
            Field::DurationDays => "일",
            Field::ArtistsTotal => "팀",
            Field::BudgetTotal
            | Field::BudgetExhibition
            | Field::BudgetAncillary
            | Field::RevenueTotal
            | Field::RevenueTickets
            | Field::CostPerVisitor => "원",
            Field::VisitorsTotal
            | Field::VisitorsDailyAvg
            | Field::VisitorsPaid
            | Field::VisitorsFree
            | Field::VisitorsStudent
            | Field::VisitorsGroup
            | Field::VisitorsArtPass
            | Field::StaffTotal
            | Field::ProgramParticipants
            | Field::OpeningAttendance
            | Field::VisitorsPerPress => "명",
            Field::ProgramCount => "개",
            Field::ProgramSessions => "회",
            Field::ArtworksTotal
            | Field::ArtworksPainting
            | Field::ArtworksSculpture
            | Field::ArtworksPhoto
            | Field::ArtworksInstallation
            | Field::ArtworksMedia
            | Field::ArtworksOther => "점",
            Field::PressCount | Field::SnsPosts => "건",
            Field::RevenueToBudget | Field::PaidRatio | Field::ProgramParticipation => "",
        }
    }

    pub fn is_derived(&self) -> bool {
        self.column().is_none()
    }
}

/// Named optional numeric fields shared by historical and current records.
///
/// `#[serde(default)]` keeps the ingestion boundary forgiving: absent JSON
/// keys simply become missing values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExhibitionFields {
    pub duration_days: Option<f64>,
    pub artists_total: Option<f64>,
    pub budget_total: Option<f64>,
    pub budget_exhibition: Option<f64>,
    pub budget_ancillary: Option<f64>,
    pub revenue_total: Option<f64>,
    pub revenue_tickets: Option<f64>,
    pub visitors_total: Option<f64>,
    pub visitors_daily_avg: Option<f64>,
    pub visitors_paid: Option<f64>,
    pub visitors_free: Option<f64>,
    pub visitors_student: Option<f64>,
    pub visitors_group: Option<f64>,
    pub visitors_art_pass: Option<f64>,
    pub staff_total: Option<f64>,
    pub program_count: Option<f64>,
    pub program_sessions: Option<f64>,
    pub program_participants: Option<f64>,
    pub opening_attendance: Option<f64>,
    pub artworks_total: Option<f64>,
    pub artworks_painting: Option<f64>,
    pub artworks_sculpture: Option<f64>,
    pub artworks_photo: Option<f64>,
    pub artworks_installation: Option<f64>,
    pub artworks_media: Option<f64>,
    pub artworks_other: Option<f64>,
    pub press_count: Option<f64>,
    pub sns_posts: Option<f64>,
}

impl ExhibitionFields {
    /// Read an ingested field by its vocabulary key. Derived fields are not
    /// stored here; asking for one yields `None`.
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::DurationDays => self.duration_days,
            Field::ArtistsTotal => self.artists_total,
            Field::BudgetTotal => self.budget_total,
            Field::BudgetExhibition => self.budget_exhibition,
            Field::BudgetAncillary => self.budget_ancillary,
            Field::RevenueTotal => self.revenue_total,
            Field::RevenueTickets => self.revenue_tickets,
            Field::VisitorsTotal => self.visitors_total,
            Field::VisitorsDailyAvg => self.visitors_daily_avg,
            Field::VisitorsPaid => self.visitors_paid,
            Field::VisitorsFree => self.visitors_free,
            Field::VisitorsStudent => self.visitors_student,
            Field::VisitorsGroup => self.visitors_group,
            Field::VisitorsArtPass => self.visitors_art_pass,
            Field::StaffTotal => self.staff_total,
            Field::ProgramCount => self.program_count,
            Field::ProgramSessions => self.program_sessions,
            Field::ProgramParticipants => self.program_participants,
            Field::OpeningAttendance => self.opening_attendance,
            Field::ArtworksTotal => self.artworks_total,
            Field::ArtworksPainting => self.artworks_painting,
            Field::ArtworksSculpture => self.artworks_sculpture,
            Field::ArtworksPhoto => self.artworks_photo,
            Field::ArtworksInstallation => self.artworks_installation,
            Field::ArtworksMedia => self.artworks_media,
            Field::ArtworksOther => self.artworks_other,
            Field::PressCount => self.press_count,
            Field::SnsPosts => self.sns_posts,
            _ => None,
        }
    }

    /// Write an ingested field by its vocabulary key (ingestion only).
    pub fn set(&mut self, field: Field, value: Option<f64>) {
        match field {
            Field::DurationDays => self.duration_days = value,
            Field::ArtistsTotal => self.artists_total = value,
            Field::BudgetTotal => self.budget_total = value,
            Field::BudgetExhibition => self.budget_exhibition = value,
            Field::BudgetAncillary => self.budget_ancillary = value,
            Field::RevenueTotal => self.revenue_total = value,
            Field::RevenueTickets => self.revenue_tickets = value,
            Field::VisitorsTotal => self.visitors_total = value,
            Field::VisitorsDailyAvg => self.visitors_daily_avg = value,
            Field::VisitorsPaid => self.visitors_paid = value,
            Field::VisitorsFree => self.visitors_free = value,
            Field::VisitorsStudent => self.visitors_student = value,
            Field::VisitorsGroup => self.visitors_group = value,
            Field::VisitorsArtPass => self.visitors_art_pass = value,
            Field::StaffTotal => self.staff_total = value,
            Field::ProgramCount => self.program_count = value,
            Field::ProgramSessions => self.program_sessions = value,
            Field::ProgramParticipants => self.program_participants = value,
            Field::OpeningAttendance => self.opening_attendance = value,
            Field::ArtworksTotal => self.artworks_total = value,
            Field::ArtworksPainting => self.artworks_painting = value,
            Field::ArtworksSculpture => self.artworks_sculpture = value,
            Field::ArtworksPhoto => self.artworks_photo = value,
            Field::ArtworksInstallation => self.artworks_installation = value,
            Field::ArtworksMedia => self.artworks_media = value,
            Field::ArtworksOther => self.artworks_other = value,
            Field::PressCount => self.press_count = value,
            Field::SnsPosts => self.sns_posts = value,
            _ => {}
        }
    }
}

/// Ratio columns filled by the derived-metrics pass. Always `None` on a
/// freshly loaded record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivedFields {
    pub cost_per_visitor: Option<f64>,
    pub revenue_to_budget: Option<f64>,
    pub paid_ratio: Option<f64>,
    pub program_participation: Option<f64>,
    pub visitors_per_press: Option<f64>,
}

/// One row of the reference corpus. Immutable after loading; the derived
/// block is only written by [`crate::derived::with_derived_metrics`], which
/// returns a fresh copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub title: String,
    pub exhibition_type: Option<f64>,
    #[serde(flatten)]
    pub fields: ExhibitionFields,
    #[serde(flatten)]
    pub derived: DerivedFields,
}

impl HistoricalRecord {
    /// Read any vocabulary field, base or derived.
    pub fn value(&self, field: Field) -> Option<f64> {
        match field {
            Field::CostPerVisitor => self.derived.cost_per_visitor,
            Field::RevenueToBudget => self.derived.revenue_to_budget,
            Field::PaidRatio => self.derived.paid_ratio,
            Field::ProgramParticipation => self.derived.program_participation,
            Field::VisitorsPerPress => self.derived.visitors_per_press,
            other => self.fields.get(other),
        }
    }
}

/// The exhibition under evaluation. Supplied fresh per analysis run and
/// never mixed into the corpus; its ratios are computed on the fly by the
/// generators rather than stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub exhibition_type: Option<f64>,
    #[serde(flatten)]
    pub fields: ExhibitionFields,
}

impl CurrentRecord {
    pub fn value(&self, field: Field) -> Option<f64> {
        self.fields.get(field)
    }
}
