use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Buckets used for the static catalog and for filename classification.
/// `Numbered` doubles as the default for anything unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Casual,
    Formal,
    Traditional,
    Numbered,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Casual,
        Category::Formal,
        Category::Traditional,
        Category::Numbered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Casual => "casual",
            Category::Formal => "formal",
            Category::Traditional => "traditional",
            Category::Numbered => "numbered",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub url: String,
    pub description: String,
}

/// Fixed at process start, never mutated afterwards; safe to share across
/// request handlers without synchronization.
pub struct Catalog {
    entries: BTreeMap<Category, Vec<CatalogItem>>,
}

impl Catalog {
    fn built_in() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(Category::Casual, to_items(CASUAL_ITEMS));
        entries.insert(Category::Formal, to_items(FORMAL_ITEMS));
        entries.insert(Category::Traditional, to_items(TRADITIONAL_ITEMS));
        entries.insert(Category::Numbered, to_items(NUMBERED_ITEMS));
        Catalog { entries }
    }

    pub fn items(&self, category: Category) -> &[CatalogItem] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

pub static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::built_in);

fn to_items(raw: &[(&str, &str)]) -> Vec<CatalogItem> {
    raw.iter()
        .map(|(url, description)| CatalogItem {
            url: (*url).to_string(),
            description: (*description).to_string(),
        })
        .collect()
}

const CASUAL_ITEMS: &[(&str, &str)] = &[
    (
        "https://m.media-amazon.com/images/I/91QwlOR7xKL._AC_UY1100_.jpg",
        "Classic blue denim shirt with a modern fit",
    ),
    (
        "https://m.media-amazon.com/images/I/61yCdfrgrjL._AC_UY1100_.jpg",
        "Stylish striped casual shirt with comfortable fabric",
    ),
    (
        "https://m.media-amazon.com/images/I/41lw7KaRIcL._AC_UY1100_.jpg",
        "Lightweight cotton shirt perfect for everyday wear",
    ),
    (
        "https://m.media-amazon.com/images/I/71leRerWguL._AC_UY1100_.jpg",
        "Trendy printed shirt with a relaxed fit",
    ),
    (
        "https://m.media-amazon.com/images/I/91p2I3Ke2LL._AC_UY1100_.jpg",
        "Casual button-down shirt with a contemporary style",
    ),
    (
        "https://m.media-amazon.com/images/I/712ppFfhdKL._AC_UY1100_.jpg",
        "Modern slim-fit shirt with a clean design",
    ),
    (
        "https://images-eu.ssl-images-amazon.com/images/I/61LYRZ-uH6L._AC_SR462,693_.jpg",
        "Versatile casual shirt with a comfortable cut",
    ),
    (
        "https://images-na.ssl-images-amazon.com/images/I/31vJreR4XxS._SL500_._AC_UL160_SR160,160_.jpg",
        "Essential casual shirt with a classic look",
    ),
    (
        "https://images-eu.ssl-images-amazon.com/images/I/71l3noLH1wL._AC_SR462,693_.jpg",
        "Stylish casual shirt with a modern twist",
    ),
    (
        "https://assets.myntassets.com/dpr_1.5,q_60,w_400,c_limit,fl_progressive/assets/images/29265888/2024/4/30/fe4c28bd-d5fb-467d-9d5e-26e3be3f7b671714470947075Shirts1.jpg",
        "Premium casual shirt with a sophisticated design",
    ),
    (
        "https://d118ps6mg0w7om.cloudfront.net/media/catalog/product/s/s/fit-in/1000x1333/ss25_lot8_mfs-15941-u-88-beige_1_mfs-15941-u-88-beige.jpg",
        "Elegant beige casual shirt with a refined style",
    ),
    (
        "https://m.media-amazon.com/images/I/81gvfhU5P1L._AC_UY1100_.jpg",
        "Comfortable casual shirt with a relaxed fit",
    ),
    (
        "https://images-eu.ssl-images-amazon.com/images/I/61RD2-GNloL._AC_UL210_SR210,210_.jpg",
        "Classic casual shirt with a timeless design",
    ),
    (
        "https://images-eu.ssl-images-amazon.com/images/I/71JdCHFBJ7L._AC_SR462,693_.jpg",
        "Modern casual shirt with a stylish pattern",
    ),
    (
        "https://images-eu.ssl-images-amazon.com/images/I/61e3eyS9NtL._AC_SR462,693_.jpg",
        "Trendy casual shirt with a contemporary look",
    ),
    (
        "https://m.media-amazon.com/images/G/31/img21/MA2024/HOTW/Top_Styles/Solid_shirts_981x1220._SX282_QL85_FMpng_.png",
        "Solid color casual shirt with a clean design",
    ),
    (
        "https://rukminim2.flixcart.com/image/850/1000/xif0q/shopsy-shirt/c/d/s/xl-s-men-stylish-casual-premium-printed-lycra-shirt-certizo-original-imaghduejqzhzpff.jpeg?q=90&crop=false",
        "Premium printed casual shirt with a modern fit",
    ),
    (
        "https://rukminim3.flixcart.com/image/850/1000/xif0q/shirt/i/i/y/l-hk-shirt-1274-global-nomad-original-imahyuqvhrr23zfv.jpeg?q=90&crop=false",
        "Stylish casual shirt with a unique pattern",
    ),
];

const FORMAL_ITEMS: &[(&str, &str)] = &[
    (
        "https://i.pinimg.com/564x/06/0f/13/060f13c1861db6dce3532ac07f72212f.jpg",
        "Classic black formal suit with a modern cut",
    ),
    (
        "https://i.pinimg.com/564x/01/23/8e/01238e0ecce618da54e1a971f195da18.jpg",
        "Elegant navy blue suit with a sophisticated style",
    ),
    (
        "https://i.pinimg.com/736x/6a/39/45/6a3945f4016b87b35c7a8833abe2e74f.jpg",
        "Premium charcoal grey suit with a tailored fit",
    ),
    (
        "https://i.pinimg.com/736x/14/8a/8b/148a8bf21abeb27a79780b558770fbe1.jpg",
        "Stylish formal suit with a contemporary design",
    ),
    (
        "https://i.pinimg.com/736x/63/d9/f7/63d9f756c417fb4b770235d8689fe3bb.jpg",
        "Classic formal suit with a timeless appeal",
    ),
    (
        "https://cdn.shopify.com/s/files/1/0266/6276/4597/files/301013488BROWN_3_800x.jpg?v=1738664336",
        "Rich brown formal suit with a premium finish",
    ),
    (
        "https://m.media-amazon.com/images/I/81FsAK9bdFL._AC_UY1100_.jpg",
        "Professional formal suit with a sleek design",
    ),
    (
        "https://m.media-amazon.com/images/I/81jSlks0kxL._AC_UY1100_.jpg",
        "Modern formal suit with a sophisticated look",
    ),
    (
        "https://m.media-amazon.com/images/I/81hBcNrx1DL._AC_UY1100_.jpg",
        "Elegant formal suit with a refined style",
    ),
    (
        "https://m.media-amazon.com/images/I/51VTh2IjYYL._AC_UY1100_.jpg",
        "Classic formal suit with a premium quality",
    ),
    (
        "https://m.media-amazon.com/images/I/71tiwdAduZL.jpg",
        "Stylish formal suit with a modern twist",
    ),
    (
        "https://m.media-amazon.com/images/I/31Iu8M1p7FL._AC_UY1100_.jpg",
        "Professional formal suit with a clean design",
    ),
    (
        "https://m.media-amazon.com/images/G/31/img19/Fashion/AW19/QC/Men/louis-philippe.jpg",
        "Premium formal suit with a luxury finish",
    ),
    (
        "https://m.media-amazon.com/images/G/31/img18/apparel/men/brands/50/Peter-England50._CB462474288_.jpg",
        "Classic formal suit with a traditional style",
    ),
    (
        "https://m.media-amazon.com/images/G/31/Symbol/brandtile/AH._CB461069312_.jpg",
        "Elegant formal suit with a sophisticated design",
    ),
    (
        "https://m.media-amazon.com/images/I/51kg1NaxGTL._SY350_.jpg",
        "Modern formal suit with a contemporary look",
    ),
    (
        "https://www.westside.com/cdn/shop/articles/formal_wear_for_men_eea788ec-9422-49e0-bba6-c75992c23c10.jpg?v=1677785539",
        "Premium formal suit with a stylish design",
    ),
];

const TRADITIONAL_ITEMS: &[(&str, &str)] = &[
    (
        "https://m.media-amazon.com/images/I/711ENWikFnL._AC_UY1100_.jpg",
        "Elegant silk kurta with intricate embroidery",
    ),
    (
        "https://m.media-amazon.com/images/I/51h+t3U2B1L._AC_UY1100_.jpg",
        "Classic cotton kurta with traditional patterns",
    ),
    (
        "https://m.media-amazon.com/images/I/713ytHed8jL._AC_UY1100_.jpg",
        "Premium silk kurta with detailed work",
    ),
    (
        "https://m.media-amazon.com/images/I/6185XEXXDGL._AC_UY1100_.jpg",
        "Stylish kurta with contemporary design",
    ),
    (
        "https://m.media-amazon.com/images/I/51QhAdV8vhL._AC_UY1100_.jpg",
        "Traditional kurta with modern elements",
    ),
    (
        "https://m.media-amazon.com/images/I/71K0ux4XHCL._AC_UY1100_.jpg",
        "Embroidered kurta with premium finish",
    ),
    (
        "https://m.media-amazon.com/images/I/71uiPE79+rL._AC_UY1100_.jpg",
        "Designer kurta with intricate details",
    ),
    (
        "https://m.media-amazon.com/images/I/71eXQD70FVL._AC_UY1100_.jpg",
        "Luxury kurta with sophisticated style",
    ),
    (
        "https://m.media-amazon.com/images/I/81OM9iuLspL._AC_UY1100_.jpg",
        "Premium kurta with traditional motifs",
    ),
    (
        "https://m.media-amazon.com/images/I/61rKwXz4EFL._AC_UY1100_.jpg",
        "Classic kurta with elegant design",
    ),
    (
        "https://m.media-amazon.com/images/I/61pTD0tPAIL._AC_UY1000_.jpg",
        "Stylish kurta with contemporary patterns",
    ),
    (
        "https://m.media-amazon.com/images/I/312mukaLHKL._UF894,1000_QL80_.jpg",
        "Traditional kurta with premium quality",
    ),
    (
        "https://m.media-amazon.com/images/I/81T+t2vM9RL._AC_UY1100_.jpg",
        "Designer kurta with unique style",
    ),
    (
        "https://m.media-amazon.com/images/I/81KbZAZj8hL._AC_UY1100_.jpg",
        "Elegant kurta with sophisticated design",
    ),
    (
        "https://i.pinimg.com/736x/65/55/38/6555385e94e387ac3294df33419d4ccf.jpg",
        "Premium kurta with traditional embroidery",
    ),
    (
        "https://m.media-amazon.com/images/G/31/img24/MA/Sep/Jupiter24/EW/WeddingWardrobe/Engagement_Party._SY624_QL85_.jpg",
        "Festive kurta with celebration style",
    ),
    (
        "https://m.media-amazon.com/images/I/71Xrbm9XXmL._AC_UF894,1000_QL80_.jpg",
        "Classic kurta with modern touch",
    ),
    (
        "https://m.media-amazon.com/images/G/31/img24/MA/Sep/Jupiter24/EW/WeddingWardrobe/Pop_Colours_copy._SY750_QL85_FMpng_.png",
        "Vibrant kurta with contemporary colors",
    ),
    (
        "https://assets0.mirraw.com/images/6289010/VP007025(1)_long_webp.webp?1696934354",
        "Traditional kurta with artistic design",
    ),
    (
        "https://m.media-amazon.com/images/I/71JdUC5QCNL._AC_UY1100_.jpg",
        "Premium kurta with elegant finish",
    ),
];

const NUMBERED_ITEMS: &[(&str, &str)] = &[
    (
        "https://i.pinimg.com/170x/26/cb/40/26cb4058694f608551d028104b93c1fa.jpg",
        "Classic casual outfit with modern style",
    ),
    (
        "https://i.pinimg.com/736x/4a/1e/9f/4a1e9f5486e7628d9e5486d0bd5145a5.jpg",
        "Trendy street style outfit",
    ),
    (
        "https://cdn.onpointfresh.com/wp-content/uploads/2022/02/4c9d6e01c4ff1a273aa3c0759984e770.jpg",
        "Minimalist fashion with clean lines",
    ),
    (
        "https://i.pinimg.com/474x/33/9e/91/339e9146dfe14eeb545555ad52416179.jpg",
        "Urban casual style with character",
    ),
    (
        "https://www.fashionbeans.com/wp-content/uploads/2024/04/lestrangelondon_manincasualoutfitsittinginfrontofadoorway.jpg",
        "Contemporary street fashion",
    ),
    (
        "https://preview.redd.it/what-do-you-call-this-kind-of-outfit-aesthetic-v0-9rw005zf76yc1.jpg?width=640&crop=smart&auto=webp&s=fde5e0ce7c18321c42c3b20997729b478455773d",
        "Modern aesthetic outfit",
    ),
    (
        "https://cdnz.blacklapel.com/thecompass/2024/02/Screen-Shot-2024-02-12-at-9.27.06-AM.png",
        "Sophisticated casual wear",
    ),
    (
        "https://www.fashionbeans.com/wp-content/uploads/2024/04/theresortco_manwearinganavypiquepopovershirtandwhitejeans.jpg",
        "Resort casual style",
    ),
    (
        "https://cdn.onpointfresh.com/wp-content/uploads/2022/06/1a0191c638a39e410b56c5ee01a20b88.jpg",
        "Fresh and modern outfit",
    ),
    (
        "https://preview.redd.it/what-do-you-call-this-kind-of-outfit-aesthetic-v0-a48bxwnf76yc1.jpg?width=640&crop=smart&auto=webp&s=0b6a77ed2f529f3d5037b1c0d55c70c84eba67ac",
        "Contemporary street style",
    ),
    (
        "https://cdn.onpointfresh.com/wp-content/uploads/2022/02/1cdb4c21b213ca7b1706b6eee30cbd5b-683x1024.jpg",
        "Urban fashion statement",
    ),
    (
        "https://i.pinimg.com/564x/5a/d0/7f/5ad07fce9d0e887dcb347068aee92e6b.jpg",
        "Modern casual elegance",
    ),
    (
        "https://cdn.onpointfresh.com/wp-content/uploads/2022/09/8a4f8d6c85f5a64558661f53ccbee701.jpg",
        "Trendy street wear",
    ),
    (
        "https://i.pinimg.com/736x/82/41/95/824195a7666b0a6911a14c366beafa96.jpg",
        "Contemporary fashion style",
    ),
    (
        "https://i.pinimg.com/originals/07/f4/ce/07f4ce327308baf42643ffed5edd0ba9.jpg",
        "Modern urban outfit",
    ),
    (
        "https://cdn.onpointfresh.com/wp-content/uploads/2021/12/233660d4b9f0f461c67cb6506c29c56c-1024x1024.jpg",
        "Fresh street style",
    ),
    (
        "https://preview.redd.it/old-money-style-looking-for-inspo-v0-s2sws04qadyb1.jpg?width=615&format=pjpg&auto=webp&s=8082b34314e6661354c2d32846ba9c822ff219bc",
        "Classic sophisticated style",
    ),
    (
        "https://i.pinimg.com/736x/38/a1/7b/38a17b2c5c52a432d76fe558614d255e.jpg",
        "Modern fashion inspiration",
    ),
    (
        "https://cdn.onpointfresh.com/wp-content/uploads/2022/02/a4cf6b2d90150c4d227cf592b6bed684.jpg",
        "Contemporary casual wear",
    ),
    (
        "https://d1fufvy4xao6k9.cloudfront.net/images/blog/posts/2023/09/hockerty_ethical_fashion_for_men_a28a3041_a73b_4b79_a598_dd7267a0489a.jpg",
        "Ethical fashion style",
    ),
    (
        "https://cdn.shopify.com/s/files/1/0287/7918/4225/files/skater-boy-aesthetic-fashion_480x480.png?v=1669711187",
        "Skater aesthetic fashion",
    ),
    (
        "https://cdn.onpointfresh.com/wp-content/uploads/2021/10/Korean-Mens-Minimal-Outfit.png",
        "Korean minimal style",
    ),
    (
        "https://cdn.onpointfresh.com/wp-content/uploads/2021/09/skater-boy-aesthetic-clothes-1-824x1024.jpg",
        "Skater boy fashion",
    ),
    (
        "https://www.mrporter.com/content/images/cms/ycm/resource/blob/884560/ebaae4462b405b2660e24dd6204ba8c0/6ce83531-16f2-4d88-a2c2-cda310758d8f-data.jpg/w800_q65.jpg",
        "Premium casual style",
    ),
    (
        "https://i.pinimg.com/736x/1a/21/59/1a2159b5cd2222b1c4ef11719e6a9589.jpg",
        "Modern street fashion",
    ),
    (
        "https://i.pinimg.com/originals/97/0a/c0/970ac0cec7edd79f7a3fb26f0dcadd82.jpg",
        "Contemporary urban style",
    ),
    (
        "https://m.media-amazon.com/images/I/71FZSbi83oL._AC_UY1100_.jpg",
        "Classic casual outfit",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_items() {
        for category in Category::ALL {
            assert!(
                !CATALOG.items(category).is_empty(),
                "empty pool for {category}"
            );
        }
    }

    #[test]
    fn category_names_round_trip_through_serde() {
        for category in Category::ALL {
            let encoded = serde_json::to_string(&category).unwrap();
            assert_eq!(encoded, format!("\"{}\"", category.as_str()));
            let decoded: Category = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, category);
        }
    }
}
