use learn_core::model::Language;

/// Fixed interface strings. Content text (quiz names, questions) comes from
/// the API and is localized there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Msg {
    AppTitle,
    Tagline,
    ImStudent,
    ImTeacher,
    GoToDashboard,
    Logout,
    StudentLogin,
    TeacherLogin,
    Username,
    Password,
    ConfirmPassword,
    FullName,
    SchoolId,
    SignIn,
    CreateAccount,
    HaveAccount,
    NeedAccount,
    StudentDashboard,
    TeacherDashboard,
    QuizCenter,
    QuizzesCompleted,
    AverageScore,
    RecentAttempts,
    NoAttempts,
    Attempt,
    BrowseQuizzes,
    NoQuizzes,
    Questions,
    Minutes,
    TakeQuiz,
    StartQuiz,
    TimeLimit,
    TimeLeft,
    Previous,
    Next,
    Submit,
    Submitting,
    SubmitFailed,
    RetrySubmit,
    TimeUp,
    QuizComplete,
    Correct,
    Passed,
    KeepPracticing,
    Retake,
    BackToQuizzes,
    QuizNotFound,
    QuizUnavailable,
    Lessons,
    NoLessons,
    WatchLesson,
    BackToLessons,
    LessonNotFound,
    VideoUnavailable,
    Watched,
    Students,
    PassedCount,
    Student,
    Score,
    Badges,
    Progress,
    NoStudents,
    Loading,
    Retry,
    SomethingWentWrong,
    NetworkProblem,
    SessionExpired,
    WrongAccountType,
    PasswordsDiffer,
    FillAllFields,
}

impl Msg {
    #[must_use]
    pub fn text(self, language: Language) -> &'static str {
        let (en, hi, pa) = self.variants();
        match language {
            Language::En => en,
            Language::Hi => hi,
            Language::Pa => pa,
        }
    }

    #[allow(clippy::too_many_lines)]
    fn variants(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Msg::AppTitle => ("Digital Literacy", "डिजिटल साक्षरता", "ਡਿਜੀਟਲ ਸਾਖਰਤਾ"),
            Msg::Tagline => (
                "Learn to use computers and the internet, in your language.",
                "अपनी भाषा में कंप्यूटर और इंटरनेट चलाना सीखें।",
                "ਆਪਣੀ ਭਾਸ਼ਾ ਵਿੱਚ ਕੰਪਿਊਟਰ ਅਤੇ ਇੰਟਰਨੈੱਟ ਵਰਤਣਾ ਸਿੱਖੋ।",
            ),
            Msg::ImStudent => ("I am a student", "मैं छात्र हूँ", "ਮੈਂ ਵਿਦਿਆਰਥੀ ਹਾਂ"),
            Msg::ImTeacher => ("I am a teacher", "मैं शिक्षक हूँ", "ਮੈਂ ਅਧਿਆਪਕ ਹਾਂ"),
            Msg::GoToDashboard => ("Go to dashboard", "डैशबोर्ड पर जाएँ", "ਡੈਸ਼ਬੋਰਡ ਤੇ ਜਾਓ"),
            Msg::Logout => ("Log out", "लॉग आउट", "ਲੌਗ ਆਊਟ"),
            Msg::StudentLogin => ("Student login", "छात्र लॉगिन", "ਵਿਦਿਆਰਥੀ ਲੌਗਇਨ"),
            Msg::TeacherLogin => ("Teacher login", "शिक्षक लॉगिन", "ਅਧਿਆਪਕ ਲੌਗਇਨ"),
            Msg::Username => ("Username", "उपयोगकर्ता नाम", "ਯੂਜ਼ਰਨੇਮ"),
            Msg::Password => ("Password", "पासवर्ड", "ਪਾਸਵਰਡ"),
            Msg::ConfirmPassword => ("Confirm password", "पासवर्ड दोबारा लिखें", "ਪਾਸਵਰਡ ਦੁਬਾਰਾ ਲਿਖੋ"),
            Msg::FullName => ("Full name", "पूरा नाम", "ਪੂਰਾ ਨਾਮ"),
            Msg::SchoolId => ("School ID", "स्कूल आईडी", "ਸਕੂਲ ਆਈਡੀ"),
            Msg::SignIn => ("Sign in", "साइन इन करें", "ਸਾਈਨ ਇਨ ਕਰੋ"),
            Msg::CreateAccount => ("Create account", "खाता बनाएँ", "ਖਾਤਾ ਬਣਾਓ"),
            Msg::HaveAccount => (
                "Already have an account? Sign in",
                "पहले से खाता है? साइन इन करें",
                "ਪਹਿਲਾਂ ਤੋਂ ਖਾਤਾ ਹੈ? ਸਾਈਨ ਇਨ ਕਰੋ",
            ),
            Msg::NeedAccount => (
                "New here? Create an account",
                "नए हैं? खाता बनाएँ",
                "ਨਵੇਂ ਹੋ? ਖਾਤਾ ਬਣਾਓ",
            ),
            Msg::StudentDashboard => ("My learning", "मेरी पढ़ाई", "ਮੇਰੀ ਪੜ੍ਹਾਈ"),
            Msg::TeacherDashboard => ("Class analytics", "कक्षा विश्लेषण", "ਜਮਾਤ ਵਿਸ਼ਲੇਸ਼ਣ"),
            Msg::QuizCenter => ("Quiz center", "क्विज़ केंद्र", "ਕੁਇਜ਼ ਕੇਂਦਰ"),
            Msg::QuizzesCompleted => ("Quizzes completed", "पूरे किए क्विज़", "ਪੂਰੇ ਕੀਤੇ ਕੁਇਜ਼"),
            Msg::AverageScore => ("Average score", "औसत अंक", "ਔਸਤ ਅੰਕ"),
            Msg::RecentAttempts => ("Recent attempts", "हाल के प्रयास", "ਹਾਲੀਆ ਕੋਸ਼ਿਸ਼ਾਂ"),
            Msg::NoAttempts => (
                "No quizzes taken yet.",
                "अभी तक कोई क्विज़ नहीं दिया।",
                "ਹਾਲੇ ਤੱਕ ਕੋਈ ਕੁਇਜ਼ ਨਹੀਂ ਦਿੱਤਾ।",
            ),
            Msg::Attempt => ("Attempt", "प्रयास", "ਕੋਸ਼ਿਸ਼"),
            Msg::BrowseQuizzes => ("Browse quizzes", "क्विज़ देखें", "ਕੁਇਜ਼ ਵੇਖੋ"),
            Msg::NoQuizzes => (
                "No quizzes available right now.",
                "अभी कोई क्विज़ उपलब्ध नहीं है।",
                "ਇਸ ਵੇਲੇ ਕੋਈ ਕੁਇਜ਼ ਉਪਲਬਧ ਨਹੀਂ।",
            ),
            Msg::Questions => ("questions", "प्रश्न", "ਸਵਾਲ"),
            Msg::Minutes => ("min", "मिनट", "ਮਿੰਟ"),
            Msg::TakeQuiz => ("Take quiz", "क्विज़ दें", "ਕੁਇਜ਼ ਦਿਓ"),
            Msg::StartQuiz => ("Start quiz", "क्विज़ शुरू करें", "ਕੁਇਜ਼ ਸ਼ੁਰੂ ਕਰੋ"),
            Msg::TimeLimit => ("Time limit", "समय सीमा", "ਸਮਾਂ ਸੀਮਾ"),
            Msg::TimeLeft => ("Time left", "बचा समय", "ਬਾਕੀ ਸਮਾਂ"),
            Msg::Previous => ("Previous", "पिछला", "ਪਿਛਲਾ"),
            Msg::Next => ("Next", "अगला", "ਅਗਲਾ"),
            Msg::Submit => ("Submit", "जमा करें", "ਜਮ੍ਹਾਂ ਕਰੋ"),
            Msg::Submitting => ("Submitting...", "जमा हो रहा है...", "ਜਮ੍ਹਾਂ ਹੋ ਰਿਹਾ ਹੈ..."),
            Msg::SubmitFailed => (
                "Could not submit your answers. They are saved here; please try again.",
                "आपके उत्तर जमा नहीं हो सके। वे यहाँ सुरक्षित हैं, फिर से कोशिश करें।",
                "ਤੁਹਾਡੇ ਜਵਾਬ ਜਮ੍ਹਾਂ ਨਹੀਂ ਹੋ ਸਕੇ। ਉਹ ਇੱਥੇ ਸੁਰੱਖਿਅਤ ਹਨ, ਮੁੜ ਕੋਸ਼ਿਸ਼ ਕਰੋ।",
            ),
            Msg::RetrySubmit => ("Try submitting again", "फिर से जमा करें", "ਮੁੜ ਜਮ੍ਹਾਂ ਕਰੋ"),
            Msg::TimeUp => ("Time is up!", "समय समाप्त!", "ਸਮਾਂ ਖਤਮ!"),
            Msg::QuizComplete => ("Quiz complete", "क्विज़ पूरा हुआ", "ਕੁਇਜ਼ ਪੂਰਾ ਹੋਇਆ"),
            Msg::Correct => ("correct", "सही", "ਸਹੀ"),
            Msg::Passed => ("Well done, you passed!", "शाबाश, आप पास हुए!", "ਸ਼ਾਬਾਸ਼, ਤੁਸੀਂ ਪਾਸ ਹੋ!"),
            Msg::KeepPracticing => (
                "Keep practicing and try again.",
                "अभ्यास करते रहें और फिर कोशिश करें।",
                "ਅਭਿਆਸ ਕਰਦੇ ਰਹੋ ਅਤੇ ਮੁੜ ਕੋਸ਼ਿਸ਼ ਕਰੋ।",
            ),
            Msg::Retake => ("Retake quiz", "क्विज़ दोबारा दें", "ਕੁਇਜ਼ ਦੁਬਾਰਾ ਦਿਓ"),
            Msg::BackToQuizzes => ("Back to quizzes", "क्विज़ सूची पर वापस", "ਕੁਇਜ਼ ਸੂਚੀ ਤੇ ਵਾਪਸ"),
            Msg::QuizNotFound => (
                "That quiz could not be found.",
                "वह क्विज़ नहीं मिला।",
                "ਉਹ ਕੁਇਜ਼ ਨਹੀਂ ਮਿਲਿਆ।",
            ),
            Msg::QuizUnavailable => (
                "That quiz could not be loaded.",
                "वह क्विज़ लोड नहीं हो सका।",
                "ਉਹ ਕੁਇਜ਼ ਲੋਡ ਨਹੀਂ ਹੋ ਸਕਿਆ।",
            ),
            Msg::Lessons => ("Video lessons", "वीडियो पाठ", "ਵੀਡੀਓ ਪਾਠ"),
            Msg::NoLessons => (
                "No lessons available right now.",
                "अभी कोई पाठ उपलब्ध नहीं है।",
                "ਇਸ ਵੇਲੇ ਕੋਈ ਪਾਠ ਉਪਲਬਧ ਨਹੀਂ।",
            ),
            Msg::WatchLesson => ("Watch", "देखें", "ਵੇਖੋ"),
            Msg::BackToLessons => ("Back to lessons", "पाठ सूची पर वापस", "ਪਾਠ ਸੂਚੀ ਤੇ ਵਾਪਸ"),
            Msg::LessonNotFound => (
                "That lesson could not be found.",
                "वह पाठ नहीं मिला।",
                "ਉਹ ਪਾਠ ਨਹੀਂ ਮਿਲਿਆ।",
            ),
            Msg::VideoUnavailable => (
                "This video is not available in your language yet.",
                "यह वीडियो अभी आपकी भाषा में उपलब्ध नहीं है।",
                "ਇਹ ਵੀਡੀਓ ਹਾਲੇ ਤੁਹਾਡੀ ਭਾਸ਼ਾ ਵਿੱਚ ਉਪਲਬਧ ਨਹੀਂ।",
            ),
            Msg::Watched => ("watched", "देखा गया", "ਵੇਖਿਆ"),
            Msg::Students => ("Students", "छात्र", "ਵਿਦਿਆਰਥੀ"),
            Msg::PassedCount => ("Passed", "पास", "ਪਾਸ"),
            Msg::Student => ("Student", "छात्र", "ਵਿਦਿਆਰਥੀ"),
            Msg::Score => ("Score", "अंक", "ਅੰਕ"),
            Msg::Badges => ("Badges", "बैज", "ਬੈਜ"),
            Msg::Progress => ("Progress", "प्रगति", "ਤਰੱਕੀ"),
            Msg::NoStudents => (
                "No student activity yet.",
                "अभी कोई छात्र गतिविधि नहीं।",
                "ਹਾਲੇ ਕੋਈ ਵਿਦਿਆਰਥੀ ਗਤੀਵਿਧੀ ਨਹੀਂ।",
            ),
            Msg::Loading => ("Loading...", "लोड हो रहा है...", "ਲੋਡ ਹੋ ਰਿਹਾ ਹੈ..."),
            Msg::Retry => ("Retry", "फिर कोशिश करें", "ਮੁੜ ਕੋਸ਼ਿਸ਼ ਕਰੋ"),
            Msg::SomethingWentWrong => (
                "Something went wrong. Please try again.",
                "कुछ गलत हो गया। कृपया फिर कोशिश करें।",
                "ਕੁਝ ਗਲਤ ਹੋ ਗਿਆ। ਕਿਰਪਾ ਕਰਕੇ ਮੁੜ ਕੋਸ਼ਿਸ਼ ਕਰੋ।",
            ),
            Msg::NetworkProblem => (
                "Cannot reach the server. Check your connection.",
                "सर्वर से संपर्क नहीं हो पा रहा। अपना कनेक्शन जाँचें।",
                "ਸਰਵਰ ਨਾਲ ਸੰਪਰਕ ਨਹੀਂ ਹੋ ਰਿਹਾ। ਆਪਣਾ ਕਨੈਕਸ਼ਨ ਜਾਂਚੋ।",
            ),
            Msg::SessionExpired => (
                "Please sign in again.",
                "कृपया फिर से साइन इन करें।",
                "ਕਿਰਪਾ ਕਰਕੇ ਮੁੜ ਸਾਈਨ ਇਨ ਕਰੋ।",
            ),
            Msg::WrongAccountType => (
                "Incorrect account type for this login page.",
                "इस लॉगिन पेज के लिए गलत खाता प्रकार।",
                "ਇਸ ਲੌਗਇਨ ਪੰਨੇ ਲਈ ਗਲਤ ਖਾਤਾ ਕਿਸਮ।",
            ),
            Msg::PasswordsDiffer => (
                "Passwords do not match.",
                "पासवर्ड मेल नहीं खाते।",
                "ਪਾਸਵਰਡ ਮੇਲ ਨਹੀਂ ਖਾਂਦੇ।",
            ),
            Msg::FillAllFields => (
                "Please fill in all fields.",
                "कृपया सभी जानकारी भरें।",
                "ਕਿਰਪਾ ਕਰਕੇ ਸਾਰੀ ਜਾਣਕਾਰੀ ਭਰੋ।",
            ),
        }
    }
}
