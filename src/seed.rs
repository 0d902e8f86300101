//! Fixed starter data. Process restart always yields exactly this
//! catalog and profile, with zero orders and empty favorites.

use crate::model::{
    BodyStats, FashionStyle, Product, ProductCategory, ProfileStats, UserProfile,
};

fn product(
    id: &str,
    title: &str,
    price: u32,
    tags: &[FashionStyle],
    category: ProductCategory,
    image_seed: u32,
) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        price,
        image: format!("https://picsum.photos/300/400?random={image_seed}"),
        tags: tags.to_vec(),
        category: Some(category),
        description: None,
        stock: None,
        sales: None,
        store_name: None,
        store_address: None,
    }
}

/// The starter catalog.
pub fn seed_products() -> Vec<Product> {
    use FashionStyle::{Business, Casual, Party, Sport};
    vec![
        Product {
            description: Some(
                "甄选顶级山羊绒，手感细腻软糯，经典H型剪裁，包容性极强。驼色系温柔显白，是秋冬衣橱的必备单品。"
                    .to_string(),
            ),
            stock: Some(120),
            sales: Some(45),
            store_name: Some("摩登时代旗舰店".to_string()),
            store_address: Some("上海市静安区南京西路1266号恒隆广场".to_string()),
            ..product("1", "极简羊绒大衣", 1299, &[Business, Casual], ProductCategory::Outer, 1)
        },
        Product {
            description: Some(
                "法式复古丝绒面料，在光影下流转迷人光泽。深V领口设计展现迷人锁骨，高开叉裙摆行走间摇曳生姿。"
                    .to_string(),
            ),
            stock: Some(15),
            sales: Some(8),
            store_name: Some("Luxe Couture".to_string()),
            store_address: Some("北京市朝阳区建国路87号SKP".to_string()),
            ..product("2", "丝绒晚礼服", 2599, &[Party], ProductCategory::Dress, 2)
        },
        Product {
            stock: Some(200),
            sales: Some(89),
            store_name: Some("Urban Sport".to_string()),
            store_address: Some("广州市天河区天河路208号天河城".to_string()),
            ..product("3", "复古运动夹克", 599, &[Sport], ProductCategory::Outer, 3)
        },
        Product {
            stock: Some(50),
            sales: Some(120),
            store_name: Some("无印良品风精选".to_string()),
            store_address: Some("成都市锦江区中纱帽街8号太古里".to_string()),
            ..product("4", "亚麻休闲衬衫", 399, &[Casual], ProductCategory::Top, 4)
        },
        Product {
            stock: Some(80),
            sales: Some(67),
            store_name: Some("摩登时代旗舰店".to_string()),
            store_address: Some("上海市静安区南京西路1266号恒隆广场".to_string()),
            ..product("5", "高腰西装裤", 499, &[Business], ProductCategory::Bottom, 5)
        },
        Product {
            stock: Some(30),
            sales: Some(21),
            store_name: Some("Urban Sport".to_string()),
            store_address: Some("广州市天河区天河路208号天河城".to_string()),
            ..product("6", "设计师联名卫衣", 899, &[Sport, Casual], ProductCategory::Top, 6)
        },
    ]
}

/// The starter profile. The orders stat is derived at read time and
/// starts at zero regardless of the stored value.
pub fn seed_profile() -> UserProfile {
    UserProfile {
        name: "时尚体验官".to_string(),
        avatar: "https://picsum.photos/200/200?random=99".to_string(),
        is_merchant: false,
        stats: ProfileStats {
            works: 24,
            likes: 1089,
            orders: 0,
        },
        body_stats: BodyStats {
            height: 165,
            weight: 52,
            bust: Some(86),
            waist: Some(64),
            hips: Some(90),
        },
    }
}
