mod answers;
mod ids;
mod language;
mod progress;
mod quiz;
mod result;
pub mod session;
mod user;
mod video;

pub use answers::AnswerMap;
pub use ids::{ParseIdError, QuestionId, QuizId, UserId, VideoId};
pub use language::{Language, LanguageError, LocalizedText};
pub use progress::{AttemptSummary, ClassOverview, ClassProgressRow, StudentProgress};
pub use quiz::{Difficulty, OptionKey, Question, Quiz, QuizError, QuizSummary};
pub use result::{PASS_MARK_PERCENT, QuizResult, QuizResultError};
pub use session::{QuizSession, SessionError, SessionState, SubmissionTicket, SubmitTrigger, Tick};
pub use user::{AuthSession, AuthToken, UserError, UserInfo, UserRole, split_full_name};
pub use video::{DEFAULT_REPORT_INTERVAL_SECS, Lesson, ProgressThrottle, VideoProgress};
