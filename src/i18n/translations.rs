use super::Locale;

macro_rules! translation_keys {
    ($($key:ident),* $(,)?) => {
        /// Every string the desktop displays. Adding a key without adding both translations
        /// fails to compile.
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
        pub enum TranslationKey {
            $($key),*
        }

        impl TranslationKey {
            pub const ALL: &'static [TranslationKey] = &[$(TranslationKey::$key),*];
        }
    };
}

translation_keys! {
    InformationAbout,
    Details,
    Preview,
    Content,
    VisitSite,
    SayHi,
    ComingSoon,
    TypeLabel,
    Trash,
    TrashMessage1,
    TrashMessage2,
    TrashButton,
    Photos,
    AllPhotos,
    AboutMe,
    Skills,
    Contact,
    AboutText,
    ICanDo,
    GetInTouch,
    Figma,
    FigmaMessage,
    Ok,
    Error,
    ErrorMessage1,
    ErrorMessage2,
    ErrorButton,
    SpotifyAll,
    SpotifyMusic,
    SpotifyMadeFor,
    SpotifyShowAll,
    SpotifyAboutArtist,
    SpotifyLikedSongs,
    SpotifyTurkishPop,
    SpotifySpringInDesert,
    SpotifyCanozan,
    SpotifyPodcasts,
    MenuFile,
    MenuEdit,
    MenuView,
    MenuHistory,
    MenuBookmarks,
    MenuDevelopment,
    MenuWindow,
    MenuHelp,
    DockPortfolio,
    DockFigma,
    DockSpotify,
    DockAlerts,
    DockNotes,
    DockPhotos,
    DockInstagram,
    DockMail,
    DockTrash,
}

/// Look up `key` in the dictionary for `locale`.
pub fn translate(locale: Locale, key: TranslationKey) -> &'static str {
    return match locale {
        Locale::En => english(key),
        Locale::Tr => turkish(key),
    };
}

pub(crate) fn english(key: TranslationKey) -> &'static str {
    use TranslationKey::*;

    return match key {
        InformationAbout => "Information about:",
        Details => "Details",
        Preview => "Preview",
        Content => "Content",
        VisitSite => "Visit Site",
        SayHi => "Say Hi!",
        ComingSoon => "Coming Soon...",
        TypeLabel => "Type:",

        Trash => "Trash",
        TrashMessage1 => "Hey! You weren't supposed to look here...",
        TrashMessage2 => "This is just my bad ideas and half-finished drafts.",
        TrashButton => "OK, I didn't see it 👀",

        Photos => "Photos",
        AllPhotos => "← All Photos",

        AboutMe => "About me",
        Skills => "Skills",
        Contact => "Contact",
        AboutText => "Hi, I'm Sabiha. Currently processing my journey as an AI & Data Engineering student at Akdeniz University. I don't just love technology; I treat it as a dataset to be optimized. From architecting software pipelines to mapping UI/UX experiences, I blend analytical rigour with visual storytelling. I'm driven by the goal of turning raw data into meaningful, creative outcomes that make a measurable difference.",
        ICanDo => "I can do...",
        GetInTouch => "Get in touch",

        Figma => "Figma",
        FigmaMessage => "Oops! We're probably building something amazing here. Come back later.",
        Ok => "Ok",

        Error => "Error",
        ErrorMessage1 => "Sabi just lost her mind.",
        ErrorMessage2 => "Shame she didn't have a hard drive copy.",
        ErrorButton => "Give up and go cry",

        SpotifyAll => "All",
        SpotifyMusic => "Music",
        SpotifyMadeFor => "Made for Sabi",
        SpotifyShowAll => "Show all",
        SpotifyAboutArtist => "About the artist",
        SpotifyLikedSongs => "Liked Songs",
        SpotifyTurkishPop => "Turkish pop 2000s...",
        SpotifySpringInDesert => "Spring in the Desert",
        SpotifyCanozan => "Canozan",
        SpotifyPodcasts => "Podcasts",

        MenuFile => "File",
        MenuEdit => "Edit",
        MenuView => "View",
        MenuHistory => "History",
        MenuBookmarks => "Bookmarks",
        MenuDevelopment => "Development",
        MenuWindow => "Window",
        MenuHelp => "Help",

        DockPortfolio => "Portfolio",
        DockFigma => "Figma",
        DockSpotify => "Spotify",
        DockAlerts => "Alerts",
        DockNotes => "Notes",
        DockPhotos => "Photos",
        DockInstagram => "Instagram",
        DockMail => "Mail",
        DockTrash => "Trash",
    };
}

pub(crate) fn turkish(key: TranslationKey) -> &'static str {
    use TranslationKey::*;

    return match key {
        InformationAbout => "Hakkında:",
        Details => "Detaylar",
        Preview => "Önizleme",
        Content => "İçerik",
        VisitSite => "Siteyi Ziyaret Et",
        SayHi => "Merhaba De!",
        ComingSoon => "Çok Yakında...",
        TypeLabel => "Tür:",

        Trash => "Çöp Kutusu",
        TrashMessage1 => "Hey! Buraya bakmaman gerekiyordu...",
        TrashMessage2 => "Burada sadece kötü fikirlerim ve yarım kalmış taslaklarım var.",
        TrashButton => "Tamam, görmedim 👀",

        Photos => "Fotoğraflar",
        AllPhotos => "← Tüm Fotoğraflar",

        AboutMe => "Hakkımda",
        Skills => "Yetenekler",
        Contact => "İletişim",
        AboutText => "Selam, ben Sabi — Akdeniz Üniversitesi'nde Yapay Zeka ve Veri Mühendisliği öğrencisiyim. Yazılım ve veri projelerinden UI/UX tasarımı ve içerik üretimine kadar, teknolojiyi yaratıcı çıktılara dönüştürmeyi seviyorum. Analitik düşünce ve görsel hikaye anlatıcılığına olan tutkumla; disiplinler arası çalışmaktan, inisiyatif almaktan ve ilham verip fark yaratan fikirleri hayata geçirmekten keyif alıyorum.",
        ICanDo => "Yapabildiklerim...",
        GetInTouch => "İletişime geç",

        Figma => "Figma",
        FigmaMessage => "Oops! Burada muhtemelen harika bir şeyler yapıyoruz. Daha sonra tekrar gel.",
        Ok => "Tamam",

        Error => "Hata",
        ErrorMessage1 => "Sabi aklını kaybetti.",
        ErrorMessage2 => "Sabi'nin sabit disk kopyası yokmuş.",
        ErrorButton => "Vazgeç ve ağla",

        SpotifyAll => "Tümü",
        SpotifyMusic => "Müzik",
        SpotifyMadeFor => "Sabi İçin Derlendi",
        SpotifyShowAll => "Tümünü göster",
        SpotifyAboutArtist => "Sanatçı hakkında",
        SpotifyLikedSongs => "Beğenilen Şarkılar",
        SpotifyTurkishPop => "Türkçe pop 2000'ler...",
        SpotifySpringInDesert => "Çölde Bahar",
        SpotifyCanozan => "Canozan",
        SpotifyPodcasts => "Podcast'ler",

        MenuFile => "Dosya",
        MenuEdit => "Düzen",
        MenuView => "Görüntü",
        MenuHistory => "Geçmiş",
        MenuBookmarks => "Yer İşaretleri",
        MenuDevelopment => "Geliştirme",
        MenuWindow => "Pencere",
        MenuHelp => "Yardım",

        DockPortfolio => "Portföy",
        DockFigma => "Figma",
        DockSpotify => "Spotify",
        DockAlerts => "Uyarılar",
        DockNotes => "Notlar",
        DockPhotos => "Fotoğraflar",
        DockInstagram => "Instagram",
        DockMail => "Mail",
        DockTrash => "Çöp",
    };
}
