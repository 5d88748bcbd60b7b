//! Static restaurant menu catalog.
//!
//! The five categories every seeded dish belongs to, and the fixed list of
//! dishes inserted by [MenuSeeder](crate::services::menu_seeder::MenuSeeder).

use rust_decimal::Decimal;

use crate::db::sqlite_helpers::cents_to_decimal;

/// Menu categories the catalog depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredCategory {
    Starters,
    MainCourses,
    Desserts,
    ColdDrinks,
    HotDrinks,
}

impl RequiredCategory {
    pub const ALL: [RequiredCategory; 5] = [
        RequiredCategory::Starters,
        RequiredCategory::MainCourses,
        RequiredCategory::Desserts,
        RequiredCategory::ColdDrinks,
        RequiredCategory::HotDrinks,
    ];

    /// Lowercased category name used for lookups
    pub fn lookup_key(&self) -> &'static str {
        match self {
            RequiredCategory::Starters => "entradas",
            RequiredCategory::MainCourses => "platos principales",
            RequiredCategory::Desserts => "postres",
            RequiredCategory::ColdDrinks => "bebidas frías",
            RequiredCategory::HotDrinks => "bebidas calientes",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RequiredCategory::Starters => "Entradas",
            RequiredCategory::MainCourses => "Platos Principales",
            RequiredCategory::Desserts => "Postres",
            RequiredCategory::ColdDrinks => "Bebidas Frías",
            RequiredCategory::HotDrinks => "Bebidas Calientes",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RequiredCategory::Starters => "Platos para comenzar",
            RequiredCategory::MainCourses => "Platos de fondo de la casa",
            RequiredCategory::Desserts => "Dulces y postres tradicionales",
            RequiredCategory::ColdDrinks => "Jugos, refrescos y gaseosas",
            RequiredCategory::HotDrinks => "Cafés, infusiones y bebidas calientes",
        }
    }

    /// `COMIDA` for food, `BEBIDA` for drinks
    pub fn kind(&self) -> &'static str {
        match self {
            RequiredCategory::ColdDrinks | RequiredCategory::HotDrinks => "BEBIDA",
            _ => "COMIDA",
        }
    }
}

/// One dish of the fixed catalog
#[derive(Debug, Clone, Copy)]
pub struct MenuItemSeed {
    pub name: &'static str,
    pub description: &'static str,
    pub price_cents: i64,
    pub category: RequiredCategory,
    pub image_url: &'static str,
    pub preparation_minutes: i32,
}

impl MenuItemSeed {
    pub fn price(&self) -> Decimal {
        cents_to_decimal(self.price_cents)
    }
}

const fn seed(
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    category: RequiredCategory,
    image_url: &'static str,
    preparation_minutes: i32,
) -> MenuItemSeed {
    MenuItemSeed {
        name,
        description,
        price_cents,
        category,
        image_url,
        preparation_minutes,
    }
}

use RequiredCategory::{ColdDrinks, Desserts, HotDrinks, MainCourses, Starters};

/// Every dish inserted by the seeder, in insertion order.
pub static MENU: &[MenuItemSeed] = &[
    // Entradas
    seed(
        "Ceviche de Pescado",
        "Fresco pescado marinado en limón con cebolla, ají y cilantro. Tradicional plato peruano.",
        2800,
        Starters,
        "/assets/images/platos/ceviche.jpg",
        15,
    ),
    seed(
        "Anticuchos",
        "Brochetas de corazón de res marinadas en ají panca y especias, a la parrilla. Acompañadas de papa y choclo.",
        1800,
        Starters,
        "/assets/images/platos/anticuchos.jpg",
        20,
    ),
    seed(
        "Causa Limeña",
        "Puré de papa amarilla con ají amarillo, relleno de pollo o atún, con mayonesa y aceitunas.",
        2200,
        Starters,
        "/assets/images/platos/causa.jpg",
        25,
    ),
    seed(
        "Papa a la Huancaína",
        "Papas cocidas bañadas en cremosa salsa de ají amarillo, queso y leche. Decoradas con huevo y aceitunas.",
        1600,
        Starters,
        "/assets/images/platos/papa-huancaina.jpg",
        20,
    ),
    seed(
        "Tequeños",
        "Palitos de queso envueltos en masa de harina, fritos hasta dorar. Crujientes por fuera, cremosos por dentro.",
        1400,
        Starters,
        "/assets/images/platos/tequenos.jpg",
        15,
    ),
    seed(
        "Chicharrón de Calamar",
        "Aros de calamar fritos hasta quedar dorados y crujientes. Acompañados de salsa tártara.",
        2400,
        Starters,
        "/assets/images/platos/chicharron-calamar.jpg",
        18,
    ),
    seed(
        "Tamal Verde",
        "Masa de maíz rellena de pollo o cerdo, envuelta en hojas de plátano y cocida al vapor.",
        1200,
        Starters,
        "/assets/images/platos/tamal.jpg",
        30,
    ),
    // Platos principales
    seed(
        "Lomo Saltado",
        "Trozos de lomo de res salteados con cebolla, tomate y ají amarillo. Servido con papas fritas y arroz blanco.",
        3200,
        MainCourses,
        "/assets/images/platos/lomo-saltado.jpg",
        25,
    ),
    seed(
        "Arroz con Pollo",
        "Arroz verde cocido con pollo, cilantro y especias. Acompañado de papa a la huancaína y ají.",
        2600,
        MainCourses,
        "/assets/images/platos/arroz-con-pollo.jpg",
        30,
    ),
    seed(
        "Aji de Gallina",
        "Pollo deshilachado en cremosa salsa de ají amarillo, leche y queso. Servido con arroz, papa y aceitunas.",
        2800,
        MainCourses,
        "/assets/images/platos/aji-gallina.jpg",
        35,
    ),
    seed(
        "Pollo a la Brasa",
        "Pollo entero marinado en especias y hierbas, asado a la brasa. Acompañado de papas fritas y ensalada.",
        3500,
        MainCourses,
        "/assets/images/platos/pollo-brasa.jpg",
        45,
    ),
    seed(
        "Seco de Res",
        "Carne de res guisada con culantro, ají y especias. Servido con frejoles, arroz y yuca sancochada.",
        3000,
        MainCourses,
        "/assets/images/platos/seco-res.jpg",
        40,
    ),
    seed(
        "Tallarines Verdes",
        "Pasta bañada en cremosa salsa de albahaca, espinaca y queso. Acompañada de bistec a la plancha.",
        2700,
        MainCourses,
        "/assets/images/platos/tallarines-verdes.jpg",
        25,
    ),
    seed(
        "Chaufa de Pollo",
        "Arroz frito estilo chifa con pollo, verduras, huevo y salsa de soya. Plato fusión peruano-chino.",
        2400,
        MainCourses,
        "/assets/images/platos/chaufa.jpg",
        20,
    ),
    seed(
        "Pescado a la Chorrillana",
        "Filete de pescado frito bañado en salsa de cebolla, tomate y ají. Acompañado de arroz y yuca.",
        2900,
        MainCourses,
        "/assets/images/platos/pescado-chorrillana.jpg",
        30,
    ),
    seed(
        "Carapulcra",
        "Guiso tradicional de papa seca con cerdo, maní y especias. Servido con arroz y yuca frita.",
        2800,
        MainCourses,
        "/assets/images/platos/carapulcra.jpg",
        45,
    ),
    seed(
        "Rocoto Relleno",
        "Rocoto relleno de carne molida, queso y especias, gratinado al horno. Acompañado de pastel de papa.",
        2600,
        MainCourses,
        "/assets/images/platos/rocoto-relleno.jpg",
        40,
    ),
    seed(
        "Cau Cau",
        "Guiso de mondongo con papa, ají amarillo y hierbabuena. Servido con arroz blanco.",
        2500,
        MainCourses,
        "/assets/images/platos/cau-cau.jpg",
        35,
    ),
    seed(
        "Tacu Tacu",
        "Mezcla de arroz y frejoles fritos, servido con bistec, huevo frito y salsa criolla.",
        2700,
        MainCourses,
        "/assets/images/platos/tacu-tacu.jpg",
        25,
    ),
    // Postres
    seed(
        "Suspiro Limeño",
        "Dulce de leche suave cubierto con merengue italiano. Postre tradicional de Lima.",
        1200,
        Desserts,
        "/assets/images/platos/suspiro-limeno.jpg",
        15,
    ),
    seed(
        "Mazamorra Morada",
        "Postre de maíz morado con frutas, canela y clavo de olor. Servido frío.",
        1000,
        Desserts,
        "/assets/images/platos/mazamorra-morada.jpg",
        20,
    ),
    seed(
        "Arroz con Leche",
        "Arroz cocido en leche con canela, clavo de olor y pasas. Postre casero tradicional.",
        900,
        Desserts,
        "/assets/images/platos/arroz-leche.jpg",
        25,
    ),
    seed(
        "Picarones",
        "Rosquillas fritas de camote y zapallo, bañadas en miel de chancaca. Postre callejero peruano.",
        1100,
        Desserts,
        "/assets/images/platos/picarones.jpg",
        20,
    ),
    seed(
        "Tres Leches",
        "Bizcocho esponjoso empapado en tres tipos de leche, cubierto con crema batida.",
        1300,
        Desserts,
        "/assets/images/platos/tres-leches.jpg",
        10,
    ),
    seed(
        "Flan de Coco",
        "Flan cremoso con sabor a coco, bañado en caramelo. Postre refrescante.",
        1100,
        Desserts,
        "/assets/images/platos/flan-coco.jpg",
        15,
    ),
    seed(
        "Turrón de Doña Pepa",
        "Postre tradicional de Lima hecho con masa de harina, anís y miel de chancaca.",
        1000,
        Desserts,
        "/assets/images/platos/turron.jpg",
        5,
    ),
    // Bebidas frías
    seed(
        "Chicha Morada",
        "Bebida refrescante de maíz morado con piña, manzana, canela y clavo de olor.",
        800,
        ColdDrinks,
        "/assets/images/platos/chicha-morada.jpg",
        5,
    ),
    seed(
        "Maracuyá",
        "Jugo natural de maracuyá, refrescante y ácido. Perfecto para acompañar cualquier plato.",
        700,
        ColdDrinks,
        "/assets/images/platos/maracuya.jpg",
        5,
    ),
    seed(
        "Limonada",
        "Limonada fresca y natural, endulzada al gusto. Bebida clásica peruana.",
        600,
        ColdDrinks,
        "/assets/images/platos/limonada.jpg",
        5,
    ),
    seed(
        "Inca Kola",
        "Gaseosa peruana de sabor único, amarilla y dulce. La bebida nacional del Perú.",
        500,
        ColdDrinks,
        "/assets/images/platos/inca-kola.jpg",
        2,
    ),
    seed(
        "Jugo de Naranja",
        "Jugo natural de naranja recién exprimido. Rico en vitamina C.",
        700,
        ColdDrinks,
        "/assets/images/platos/naranja.jpg",
        5,
    ),
    seed(
        "Agua de Cebada",
        "Bebida refrescante de cebada con limón y hierbabuena. Tradicional y saludable.",
        600,
        ColdDrinks,
        "/assets/images/platos/cebada.jpg",
        5,
    ),
    seed(
        "Coca Cola",
        "Gaseosa clásica, fría y refrescante.",
        500,
        ColdDrinks,
        "/assets/images/platos/coca-cola.jpg",
        2,
    ),
    seed(
        "Agua Mineral",
        "Agua mineral natural, sin gas. Hidratación pura.",
        400,
        ColdDrinks,
        "/assets/images/platos/agua.jpg",
        1,
    ),
    // Bebidas calientes
    seed(
        "Café Pasado",
        "Café peruano de altura, preparado al estilo tradicional. Aromático y delicioso.",
        600,
        HotDrinks,
        "/assets/images/platos/cafe.jpg",
        5,
    ),
    seed(
        "Té de Hierbas",
        "Infusión caliente de hierbas naturales: manzanilla, menta o anís. Relajante y digestivo.",
        500,
        HotDrinks,
        "/assets/images/platos/te-hierbas.jpg",
        5,
    ),
    seed(
        "Emoliente",
        "Bebida caliente tradicional peruana de cebada, linaza y hierbas. Saludable y reconfortante.",
        500,
        HotDrinks,
        "/assets/images/platos/emoliente.jpg",
        5,
    ),
    seed(
        "Chocolate Caliente",
        "Chocolate caliente cremoso y espeso, perfecto para acompañar postres.",
        700,
        HotDrinks,
        "/assets/images/platos/chocolate.jpg",
        5,
    ),
    seed(
        "Café con Leche",
        "Café pasado con leche caliente. Bebida clásica y reconfortante.",
        700,
        HotDrinks,
        "/assets/images/platos/cafe-leche.jpg",
        5,
    ),
    seed(
        "Té de Coca",
        "Infusión de hojas de coca, tradicional de los Andes. Ayuda con la altura y digestión.",
        600,
        HotDrinks,
        "/assets/images/platos/te-coca.jpg",
        5,
    ),
];
