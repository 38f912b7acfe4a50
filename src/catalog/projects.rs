use crate::Color;

/// What a project window shows below its details.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ProjectContent {
    Gallery {
        images: &'static [&'static str],
        coming_soon: bool,
    },
    Folder {
        items: &'static [&'static str],
    },
    /// A single swatch in the project's preview colour.
    Preview,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Link {
    Mail(&'static str),
    Web(&'static str),
}

#[derive(Clone, PartialEq, Debug)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub preview_color: Color,
    /// Percent of the desktop width and height.
    pub anchor: (u8, u8),
    pub icon_image: &'static str,
    pub content: ProjectContent,
    pub link: Option<Link>,
}

impl Link {
    pub fn url(&self) -> String {
        return match self {
            Link::Mail(address) => format!("mailto:{}", address),
            Link::Web(url) => url.to_string(),
        };
    }

    pub fn is_mail(&self) -> bool {
        return matches!(self, Link::Mail(_));
    }
}

/// Look up a project by its identifier.
pub fn project(id: &str) -> Option<&'static Project> {
    return PROJECTS.iter().find(|p| p.id == id);
}

pub static PROJECTS: [Project; 12] = [
    Project {
        id: "rotanova-v2",
        name: "ROTA 1",
        kind: "UI/UX Design",
        category: "Website",
        description: "Seyahat acentesi web sitesinin ikinci versiyon UI/UX çalışması. Kapadokya temalı hero, destinasyonlar ve iletişim sayfaları.",
        preview_color: Color::from_hex(0x2d1b4e),
        anchor: (10, 10),
        icon_image: "/folderImages/folderImage1i.png",
        content: ProjectContent::Gallery {
            images: &[
                "/Ekran Resmi 2026-02-25 06.42.47.png",
                "/Ekran Resmi 2026-02-25 06.43.34.png",
                "/Ekran Resmi 2026-02-25 06.43.52.png",
                "/Ekran Resmi 2026-02-25 06.44.15.png",
            ],
            coming_soon: false,
        },
        link: None,
    },
    Project {
        id: "ieee-antalya",
        name: "IEEE ANTALYA",
        kind: "Web Development",
        category: "Website",
        description: "IEEE Antalya Öğrenci Kolu için Next.js ile geliştirilmiş kulüp web sitesi. 3D görseller ve modern UI bileşenleriyle tasarlandı.",
        preview_color: Color::from_hex(0x0a1628),
        anchor: (55, 8),
        icon_image: "/folderImages/folderImage2i.png",
        content: ProjectContent::Gallery {
            images: &[
                "/Ekran Resmi 2026-02-25 06.16.32.png",
                "/Ekran Resmi 2026-02-25 06.17.59.png",
                "/Ekran Resmi 2026-02-25 06.17.03.png",
            ],
            coming_soon: false,
        },
        link: Some(Link::Web("https://ieeeakdeniz.vercel.app")),
    },
    Project {
        id: "stage-visuals",
        name: "CRE-ATE",
        kind: "Web Design",
        category: "Website",
        description: "Yatırım ve teknoloji odaklı bir şirket için modern web sitesi tasarımı ve geliştirmesi.",
        preview_color: Color::from_hex(0x3b82f6),
        anchor: (25, 15),
        icon_image: "/folderImages/folderImage3i.png",
        content: ProjectContent::Gallery {
            images: &[
                "/Ekran Resmi 2026-02-25 05.46.49.png",
                "/Ekran Resmi 2026-02-25 05.57.40.png",
                "/Ekran Resmi 2026-02-25 05.59.01.png",
            ],
            coming_soon: false,
        },
        link: Some(Link::Web("https://cre-ate-1.vercel.app")),
    },
    Project {
        id: "fixpoint",
        name: "FIXPOINT",
        kind: "UI/UX Design",
        category: "Website",
        description: "Klima servisi firması için tasarlanmış web sitesi UI/UX çalışması. Her sektörde varız!",
        preview_color: Color::from_hex(0xf9a8d4),
        anchor: (40, 20),
        icon_image: "/folderImages/folderImage4i.png",
        content: ProjectContent::Gallery {
            images: &["/grafikdunyasi26.png", "/MacBook Air - 1.png"],
            coming_soon: false,
        },
        link: None,
    },
    Project {
        id: "hypers-academy",
        name: "HYPERS REDESIGN",
        kind: "UI/UX Design",
        category: "Website",
        description: "TypeScript ile geliştirilmiş, UI/UX odaklı bir eğitim platformu web sitesi redesign'ı. Tamamen eğlencesine yapılmış kişisel bir projedir.",
        preview_color: Color::from_hex(0xe53e3e),
        anchor: (70, 18),
        icon_image: "/folderImages/folderImage5i.png",
        content: ProjectContent::Gallery {
            images: &[
                "/Ekran Resmi 2026-02-25 06.04.26.png",
                "/Ekran Resmi 2026-02-25 06.05.40.png",
                "/Ekran Resmi 2026-02-25 06.06.03.png",
            ],
            coming_soon: false,
        },
        link: Some(Link::Web("https://hypers-newdesign.vercel.app")),
    },
    Project {
        id: "mobile-app",
        name: "MOBILE APP",
        kind: "Mobile Development",
        category: "React Native",
        description: "Bir mobil uygulama üzerinde çalışıyorum... Çok yakında sizlerle!",
        preview_color: Color::from_hex(0x333333),
        anchor: (15, 32),
        icon_image: "/folderImages/folderImage6i.png",
        content: ProjectContent::Gallery {
            images: &["/mobile-app-preview.png"],
            coming_soon: true,
        },
        link: None,
    },
    Project {
        id: "art-gallery",
        name: "ART GALLERY",
        kind: "Fine Art",
        category: "Painting & Drawing",
        description: "Teknolojiyle iç içe olsam da sanatın klasik formlarından kopamıyorum. Yağlıboya ve karakalem çalışmalarım, dijital dünyanın dışında kalan yaratıcı yanımı yansıtıyor.",
        preview_color: Color::from_hex(0x6b3fa0),
        anchor: (35, 35),
        icon_image: "/folderImages/folderImage10i.png",
        content: ProjectContent::Gallery {
            images: &[
                "/e684fbcf-78d4-46b4-bedb-c699fe977bb8.JPG",
                "/IMG_6359.jpg",
                "/IMG_6358.jpg",
                "/IMG_6369.jpg",
            ],
            coming_soon: false,
        },
        link: None,
    },
    Project {
        id: "data-projects",
        name: "VERİ & ML",
        kind: "Data & AI",
        category: "Database & Python",
        description: "Veri mühendisliği ve analitik tarafım. Veritabanı tasarımları, ETL pipeline'ları, Python scriptleri ve makine öğrenmesi denemeleri burada.",
        preview_color: Color::from_hex(0xc6e6b3),
        anchor: (55, 32),
        icon_image: "/folderImages/folderImage8i.png",
        content: ProjectContent::Folder {
            items: &[
                "database_projects",
                "python_scripts",
                "ml_experiments",
                "etl_pipelines",
                "sql_queries",
                "jupyter_notebooks",
            ],
        },
        link: None,
    },
    Project {
        id: "marketplace-visuals",
        name: "MARKETPLACE VISUALS",
        kind: "UI/UX Design",
        category: "Marketplace",
        description: "App Store ve Google Play için mobil uygulama mağaza görselleri oluşturuyorum. Kullanıcı deneyimini öne çıkaran, dikkat çekici ekran görüntüleri ve tanıtım tasarımları hazırlıyorum.",
        preview_color: Color::from_hex(0xf5d45e),
        anchor: (75, 35),
        icon_image: "/folderImages/folderImage9i.png",
        content: ProjectContent::Gallery {
            images: &[
                "/Untitled design-31.png",
                "/Untitled design-21.png",
                "/Untitled design-26.png",
                "/Untitled design-27.png",
            ],
            coming_soon: false,
        },
        link: None,
    },
    Project {
        id: "bilmok",
        name: "BİLMÖK",
        kind: "Graphic Design",
        category: "Branding & Social Media",
        description: "BİLMÖK (Bilgisayar Mühendisliği Öğrenci Kongresi) için sosyal medya tasarımları, branding guide ve logo çalışmaları.",
        preview_color: Color::from_hex(0xe8d5b7),
        anchor: (25, 50),
        icon_image: "/folderImages/folderImage7i.png",
        content: ProjectContent::Gallery {
            images: &[
                "/BİLMÖK SOCİAL MEDİA REFERENCES.png",
                "/BİLMÖK SOCİAL MEDİA REFERENCES-2.png",
                "/1.png",
                "/2.png",
            ],
            coming_soon: false,
        },
        link: None,
    },
    Project {
        id: "secret-help",
        name: "???",
        kind: "Easter Egg",
        category: "Secret",
        description: "Searching for a sign? This is it! You found the right file and maybe your next favorite partner. Don't be shy, drop a message and let's see what happens.",
        preview_color: Color::from_hex(0x8b6914),
        anchor: (50, 48),
        icon_image: "/folderImages/folderImage11i.png",
        content: ProjectContent::Preview,
        link: Some(Link::Mail("sabihaecemylmaz@gmail.com")),
    },
    Project {
        id: "rotanova",
        name: "ROTA 2",
        kind: "UI/UX Design",
        category: "Website",
        description: "Seyahat acentesi için tasarlanmış web sitesi UI/UX çalışması. Destinasyonlar, galeri ve SSS bölümleriyle zengin bir kullanıcı deneyimi.",
        preview_color: Color::from_hex(0xcc0000),
        anchor: (70, 50),
        icon_image: "/folderImages/folderImage12i.png",
        content: ProjectContent::Gallery {
            images: &["/new version.png"],
            coming_soon: false,
        },
        link: None,
    },
];

#[cfg(test)]
mod tests {
    use super::{project, Link, ProjectContent, PROJECTS};
    use std::collections::HashSet;

    #[test]
    fn identifiers_are_unique() {
        let ids: HashSet<&str> = PROJECTS.iter().map(|p| p.id).collect();

        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn anchors_are_percentages() {
        for p in PROJECTS.iter() {
            assert!(p.anchor.0 <= 100 && p.anchor.1 <= 100, "{}", p.id);
        }
    }

    #[test]
    fn lookup_and_links() {
        let secret = project("secret-help").unwrap();

        assert_eq!(secret.content, ProjectContent::Preview);
        assert_eq!(
            secret.link.map(|l| l.url()),
            Some("mailto:sabihaecemylmaz@gmail.com".to_string())
        );
        assert!(secret.link.map(|l| l.is_mail()).unwrap_or(false));
        assert_eq!(
            project("ieee-antalya").and_then(|p| p.link),
            Some(Link::Web("https://ieeeakdeniz.vercel.app"))
        );
        assert!(project("missing").is_none());
    }
}
