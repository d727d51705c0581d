//! The built-in curated invasive-species catalog.
//!
//! Entries carry the canonical scientific name, severity, a short rationale,
//! scientific synonyms (older binomials, reclassifications, varieties), and
//! common names — mostly Chinese, matching the deployment region of the
//! classifier. Entry order matters: containment lookups resolve overlapping
//! aliases to the first entry, so curation keeps the most specific species
//! first within each group.

use crate::types::Severity;

use super::SpeciesEntry;

fn species(
    canonical: &str,
    severity: Severity,
    reason: &str,
    synonyms: &[&str],
    common_names: &[&str],
) -> SpeciesEntry {
    SpeciesEntry::new(canonical, severity, reason, synonyms, common_names)
}

pub(super) fn builtin_entries() -> Vec<SpeciesEntry> {
    use Severity::{High, Low, Medium};

    vec![
        // Aquatic plants
        species(
            "Eichhornia crassipes",
            High,
            "Water hyacinth (Eichhornia crassipes) is a highly invasive aquatic plant that reproduces rapidly, clogs waterways, and impacts aquatic ecosystems.",
            &["Eichhornia crassipes", "Pontederia crassipes"],
            &["凤眼蓝", "凤眼莲", "水葫芦", "水浮莲"],
        ),
        species(
            "Salvinia molesta",
            High,
            "Giant salvinia is a free-floating aquatic fern that forms dense mats on water surfaces, blocking sunlight and depleting oxygen levels.",
            &["Salvinia molesta", "Salvinia adnata"],
            &["大薸", "水浮萍", "槐叶萍"],
        ),
        species(
            "Alternanthera philoxeroides",
            High,
            "Alligator weed is an aquatic and terrestrial plant that forms dense mats, blocking waterways and displacing native species.",
            &["Alternanthera philoxeroides"],
            &["空心莲子草", "水花生", "喜旱莲子草"],
        ),
        species(
            "Pistia stratiotes",
            High,
            "Water lettuce forms dense floating mats that block sunlight, reduce oxygen levels, and impede water flow.",
            &["Pistia stratiotes"],
            &["大漂", "水浮莲", "大萍"],
        ),
        species(
            "Myriophyllum aquaticum",
            High,
            "Parrot's feather is an aquatic plant that forms dense mats, outcompeting native aquatic vegetation.",
            &["Myriophyllum aquaticum", "Myriophyllum brasiliense"],
            &["粉绿狐尾藻", "水松"],
        ),
        species(
            "Hydrilla verticillata",
            High,
            "Hydrilla is a submerged aquatic plant that forms dense underwater mats, disrupting aquatic ecosystems.",
            &["Hydrilla verticillata"],
            &["黑藻", "水王荪"],
        ),
        // Herbaceous plants
        species(
            "Solidago canadensis",
            High,
            "Canada goldenrod (Solidago canadensis) is a highly invasive perennial herb that spreads aggressively through rhizomes and seeds, outcompeting native vegetation and reducing biodiversity.",
            &["Solidago canadensis", "Solidago altissima", "Solidago gigantea"],
            &["加拿大一枝黄花", "加拿大飞蓬", "一枝黄花"],
        ),
        species(
            "Ambrosia artemisiifolia",
            High,
            "Common ragweed is an annual herb that produces large amounts of pollen, causing allergies, and outcompetes native plants.",
            &["Ambrosia artemisiifolia"],
            &["豚草", "美洲豚草"],
        ),
        species(
            "Ambrosia trifida",
            High,
            "Giant ragweed is a tall annual weed that produces allergenic pollen and outcompetes native vegetation.",
            &["Ambrosia trifida"],
            &["三裂叶豚草", "大豚草"],
        ),
        species(
            "Conyza canadensis",
            Medium,
            "Canadian fleabane is a widespread annual weed that competes with crops and native plants.",
            &["Conyza canadensis", "Erigeron canadensis"],
            &["小蓬草", "加拿大飞蓬", "小白酒草"],
        ),
        species(
            "Erigeron annuus",
            Medium,
            "Annual fleabane is a common weed that spreads rapidly and competes with native vegetation.",
            &["Erigeron annuus"],
            &["一年蓬", "白顶飞蓬"],
        ),
        species(
            "Bidens pilosa",
            Medium,
            "Black-jack is a fast-growing annual weed that spreads through sticky seeds and competes with native plants.",
            &["Bidens pilosa"],
            &["鬼针草", "三叶鬼针草"],
        ),
        species(
            "Galinsoga parviflora",
            Medium,
            "Gallant soldier is a fast-growing annual weed that spreads rapidly in disturbed areas.",
            &["Galinsoga parviflora"],
            &["牛膝菊", "辣子草"],
        ),
        species(
            "Oxalis corniculata",
            Medium,
            "Creeping woodsorrel is a persistent perennial weed that spreads through seeds and stolons.",
            &["Oxalis corniculata"],
            &["酢浆草", "酸浆草"],
        ),
        species(
            "Portulaca oleracea",
            Low,
            "Common purslane is a widespread annual weed that can be invasive in agricultural areas.",
            &["Portulaca oleracea"],
            &["马齿苋", "五行草"],
        ),
        species(
            "Chenopodium album",
            Low,
            "Lamb's quarters is a common annual weed that competes with crops.",
            &["Chenopodium album"],
            &["藜", "灰菜"],
        ),
        species(
            "Amaranthus retroflexus",
            Medium,
            "Redroot pigweed is a fast-growing annual weed that competes aggressively with crops.",
            &["Amaranthus retroflexus"],
            &["反枝苋", "野苋菜"],
        ),
        species(
            "Amaranthus spinosus",
            Medium,
            "Spiny amaranth is a prickly annual weed that spreads rapidly in disturbed areas.",
            &["Amaranthus spinosus"],
            &["刺苋", "野苋"],
        ),
        species(
            "Datura stramonium",
            High,
            "Jimsonweed is a toxic annual plant that can be invasive and poses health risks to humans and animals.",
            &["Datura stramonium"],
            &["曼陀罗", "洋金花"],
        ),
        species(
            "Solanum nigrum",
            Low,
            "Black nightshade is a common annual weed that can be invasive in agricultural areas.",
            &["Solanum nigrum"],
            &["龙葵", "野海椒"],
        ),
        species(
            "Parthenium hysterophorus",
            High,
            "Parthenium weed is a highly invasive annual plant that causes allergies and outcompetes native vegetation.",
            &["Parthenium hysterophorus"],
            &["银胶菊", "假臭草"],
        ),
        species(
            "Tridax procumbens",
            Medium,
            "Coatbuttons is a spreading perennial weed that competes with native vegetation.",
            &["Tridax procumbens"],
            &["羽芒菊", "假蒲公英"],
        ),
        species(
            "Ageratum conyzoides",
            Medium,
            "Tropical whiteweed is an annual herb that spreads rapidly and competes with native plants.",
            &["Ageratum conyzoides"],
            &["藿香蓟", "胜红蓟"],
        ),
        species(
            "Chromolaena odorata",
            High,
            "Siam weed is a fast-growing shrub that forms dense thickets and displaces native vegetation.",
            &["Chromolaena odorata", "Eupatorium odoratum"],
            &["飞机草", "香泽兰"],
        ),
        species(
            "Eupatorium adenophorum",
            High,
            "Crofton weed is a perennial herb that spreads aggressively and outcompetes native vegetation.",
            &["Eupatorium adenophorum", "Ageratina adenophora"],
            &["紫茎泽兰", "破坏草"],
        ),
        species(
            "Eupatorium riparium",
            Medium,
            "Mistflower is a perennial herb that can form dense stands in riparian areas.",
            &["Eupatorium riparium"],
            &["假泽兰", "河岸泽兰"],
        ),
        // Vines
        species(
            "Mikania micrantha",
            High,
            "Mile-a-minute weed is a fast-growing vine that smothers native vegetation and reduces biodiversity.",
            &["Mikania micrantha"],
            &["薇甘菊", "小花蔓泽兰"],
        ),
        species(
            "Ipomoea cairica",
            Medium,
            "Mile-a-minute vine is a fast-growing climbing plant that can smother native vegetation.",
            &["Ipomoea cairica"],
            &["五爪金龙", "番薯藤"],
        ),
        species(
            "Ipomoea indica",
            Medium,
            "Blue morning glory is a fast-growing vine that can smother native vegetation.",
            &["Ipomoea indica"],
            &["变色牵牛", "蓝花牵牛"],
        ),
        species(
            "Pueraria montana",
            High,
            "Kudzu is an extremely fast-growing vine that can completely cover trees and structures, smothering native vegetation.",
            &["Pueraria montana", "Pueraria lobata", "Pueraria thunbergiana"],
            &["葛", "葛藤", "野葛"],
        ),
        species(
            "Anredera cordifolia",
            High,
            "Madeira vine is a fast-growing climbing plant that forms dense mats and displaces native vegetation.",
            &["Anredera cordifolia", "Boussingaultia cordifolia"],
            &["落葵薯", "藤三七"],
        ),
        species(
            "Dioscorea bulbifera",
            Medium,
            "Air potato is a fast-growing vine that can smother native vegetation.",
            &["Dioscorea bulbifera"],
            &["黄独", "黄药子"],
        ),
        // Woody plants
        species(
            "Ailanthus altissima",
            High,
            "Tree of Heaven is a fast-growing deciduous tree that spreads aggressively through root suckers and seeds, outcompeting native vegetation.",
            &["Ailanthus altissima"],
            &["臭椿", "天堂树"],
        ),
        species(
            "Lantana camara",
            High,
            "Lantana is a shrub that forms dense thickets, displacing native vegetation and reducing biodiversity.",
            &["Lantana camara"],
            &["马缨丹", "五色梅"],
        ),
        species(
            "Leucaena leucocephala",
            High,
            "White leadtree is a fast-growing tree that forms dense stands and outcompetes native vegetation.",
            &["Leucaena leucocephala"],
            &["银合欢", "白合欢"],
        ),
        species(
            "Prosopis juliflora",
            High,
            "Mesquite is a thorny tree that forms dense thickets and outcompetes native vegetation.",
            &["Prosopis juliflora"],
            &["牧豆树", "蜜花豆"],
        ),
        species(
            "Mimosa pigra",
            High,
            "Giant sensitive plant is a thorny shrub that forms impenetrable thickets in wetlands.",
            &["Mimosa pigra"],
            &["含羞草", "敏感草"],
        ),
        species(
            "Mimosa diplotricha",
            High,
            "Giant sensitive plant is a fast-growing shrub that forms dense thickets.",
            &["Mimosa diplotricha"],
            &["含羞草", "敏感草"],
        ),
        species(
            "Acacia farnesiana",
            Medium,
            "Sweet acacia is a thorny shrub that can form dense stands in disturbed areas.",
            &["Acacia farnesiana", "Vachellia farnesiana"],
            &["金合欢", "鸭皂树"],
        ),
        species(
            "Senna spectabilis",
            Medium,
            "Spectacular cassia is a fast-growing tree that can outcompete native vegetation.",
            &["Senna spectabilis", "Cassia spectabilis"],
            &["美丽决明", "黄槐"],
        ),
        species(
            "Ricinus communis",
            High,
            "Castor bean is a fast-growing shrub that is highly toxic and can be invasive in disturbed areas.",
            &["Ricinus communis"],
            &["蓖麻", "大麻子"],
        ),
        species(
            "Jatropha curcas",
            Medium,
            "Physic nut is a shrub that can be invasive in tropical and subtropical regions.",
            &["Jatropha curcas"],
            &["麻疯树", "小桐子"],
        ),
        species(
            "Broussonetia papyrifera",
            Medium,
            "Paper mulberry is a fast-growing tree that can outcompete native vegetation.",
            &["Broussonetia papyrifera"],
            &["构树", "楮树"],
        ),
        species(
            "Paulownia tomentosa",
            Medium,
            "Princess tree is a fast-growing tree that can be invasive in disturbed areas.",
            &["Paulownia tomentosa"],
            &["毛泡桐", "紫花泡桐"],
        ),
        // Grasses
        species(
            "Spartina alterniflora",
            Medium,
            "Smooth cordgrass is a salt marsh grass that can alter coastal ecosystems and displace native vegetation.",
            &["Spartina alterniflora"],
            &["互花米草", "大米草"],
        ),
        species(
            "Phragmites australis",
            Medium,
            "Common reed is a tall perennial grass that forms dense stands in wetlands, altering ecosystem structure.",
            &["Phragmites australis", "Phragmites communis"],
            &["芦苇", "欧洲芦苇"],
        ),
        species(
            "Paspalum distichum",
            Medium,
            "Knotgrass is a perennial grass that can form dense mats in wetlands and disturbed areas.",
            &["Paspalum distichum"],
            &["双穗雀稗", "两耳草"],
        ),
        species(
            "Echinochloa crus-galli",
            Low,
            "Barnyard grass is a common annual weed that competes with crops.",
            &["Echinochloa crus-galli"],
            &["稗", "稗草"],
        ),
        species(
            "Sorghum halepense",
            High,
            "Johnson grass is a highly invasive perennial grass that spreads through rhizomes and seeds.",
            &["Sorghum halepense"],
            &["假高粱", "石茅"],
        ),
        species(
            "Cynodon dactylon",
            Low,
            "Bermuda grass is a persistent perennial grass that can be invasive in some regions.",
            &["Cynodon dactylon"],
            &["狗牙根", "百慕大草"],
        ),
        species(
            "Imperata cylindrica",
            Medium,
            "Cogongrass is a highly invasive perennial grass that forms dense stands and is difficult to control.",
            &["Imperata cylindrica"],
            &["白茅", "茅草"],
        ),
        // Other significant invasives
        species(
            "Fallopia japonica",
            High,
            "Japanese knotweed is a perennial herbaceous plant that forms dense thickets, displacing native plants and causing structural damage.",
            &["Fallopia japonica", "Polygonum cuspidatum", "Reynoutria japonica"],
            &["日本虎杖", "虎杖"],
        ),
        species(
            "Fallopia sachalinensis",
            High,
            "Giant knotweed is a large perennial plant that forms dense stands and displaces native vegetation.",
            &["Fallopia sachalinensis", "Reynoutria sachalinensis"],
            &["库页岛蓼", "大虎杖"],
        ),
        species(
            "Heracleum mantegazzianum",
            High,
            "Giant hogweed is a large perennial plant that causes severe skin burns and displaces native vegetation.",
            &["Heracleum mantegazzianum"],
            &["大豕草", "巨猪草"],
        ),
        species(
            "Solanum rostratum",
            Medium,
            "Buffalo bur is a spiny annual weed that can be invasive in agricultural areas.",
            &["Solanum rostratum"],
            &["刺茄", "野番茄"],
        ),
        species(
            "Datura inoxia",
            High,
            "Downy thorn-apple is a toxic annual plant that can be invasive and poses health risks.",
            &["Datura inoxia"],
            &["毛曼陀罗", "软毛曼陀罗"],
        ),
        species(
            "Argemone mexicana",
            Medium,
            "Mexican poppy is a spiny annual weed that can be invasive in disturbed areas.",
            &["Argemone mexicana"],
            &["蓟罂粟", "墨西哥罂粟"],
        ),
        species(
            "Tribulus terrestris",
            Low,
            "Puncture vine is a spiny annual weed that can be invasive in dry areas.",
            &["Tribulus terrestris"],
            &["蒺藜", "刺蒺藜"],
        ),
        species(
            "Xanthium strumarium",
            Medium,
            "Common cocklebur is an annual weed that spreads through sticky burrs and competes with crops.",
            &["Xanthium strumarium", "Xanthium sibiricum"],
            &["苍耳", "虱麻头"],
        ),
        species(
            "Cuscuta chinensis",
            High,
            "Chinese dodder is a parasitic vine that attaches to host plants and can cause significant damage.",
            &["Cuscuta chinensis", "Cuscuta australis"],
            &["菟丝子", "无根草"],
        ),
        species(
            "Cuscuta japonica",
            High,
            "Japanese dodder is a parasitic vine that can severely damage host plants.",
            &["Cuscuta japonica"],
            &["日本菟丝子", "金灯藤"],
        ),
        species(
            "Striga asiatica",
            High,
            "Asiatic witchweed is a parasitic plant that attacks cereal crops and causes significant yield losses.",
            &["Striga asiatica"],
            &["独脚金", "亚洲独脚金"],
        ),
        species(
            "Opuntia stricta",
            High,
            "Erect prickly pear is a cactus that forms dense stands and can be difficult to control.",
            &["Opuntia stricta", "Opuntia dillenii"],
            &["仙人掌", "直立仙人掌"],
        ),
        species(
            "Opuntia ficus-indica",
            Medium,
            "Indian fig opuntia is a cactus that can form dense stands in arid regions.",
            &["Opuntia ficus-indica"],
            &["梨果仙人掌", "仙人果"],
        ),
        species(
            "Nassella neesiana",
            High,
            "Chilean needle grass is a highly invasive perennial grass that spreads rapidly and is difficult to control.",
            &["Nassella neesiana", "Stipa neesiana"],
            &["智利针茅", "尼氏针茅"],
        ),
        species(
            "Cortaderia selloana",
            High,
            "Pampas grass is a large perennial grass that forms dense stands and displaces native vegetation.",
            &["Cortaderia selloana"],
            &["蒲苇", "潘帕斯草"],
        ),
        species(
            "Rubus niveus",
            Medium,
            "Mysore raspberry is a thorny shrub that can form dense thickets.",
            &["Rubus niveus"],
            &["悬钩子", "黑莓"],
        ),
        species(
            "Ulex europaeus",
            High,
            "Gorse is a spiny shrub that forms dense impenetrable thickets and is highly flammable.",
            &["Ulex europaeus"],
            &["荆豆", "金雀花"],
        ),
        species(
            "Cytisus scoparius",
            High,
            "Scotch broom is a fast-growing shrub that forms dense stands and displaces native vegetation.",
            &["Cytisus scoparius"],
            &["金雀花", "苏格兰金雀花"],
        ),
        species(
            "Spartium junceum",
            Medium,
            "Spanish broom is a fast-growing shrub that can be invasive in Mediterranean climates.",
            &["Spartium junceum"],
            &["西班牙金雀花", "染料木"],
        ),
        species(
            "Tamarix chinensis",
            High,
            "Chinese tamarisk is a salt-tolerant tree that can alter soil chemistry and displace native vegetation.",
            &["Tamarix chinensis", "Tamarix ramosissima"],
            &["柽柳", "中国柽柳"],
        ),
        species(
            "Robinia pseudoacacia",
            Medium,
            "Black locust is a fast-growing tree that can form dense stands and outcompete native vegetation.",
            &["Robinia pseudoacacia"],
            &["刺槐", "洋槐"],
        ),
        species(
            "Elaeagnus angustifolia",
            Medium,
            "Russian olive is a fast-growing tree that can be invasive in riparian areas.",
            &["Elaeagnus angustifolia"],
            &["沙枣", "桂香柳"],
        ),
        species(
            "Ligustrum sinense",
            Medium,
            "Chinese privet is a fast-growing shrub that forms dense thickets and displaces native vegetation.",
            &["Ligustrum sinense"],
            &["小蜡", "山指甲"],
        ),
        species(
            "Ligustrum lucidum",
            Medium,
            "Glossy privet is a fast-growing tree that can be invasive in some regions.",
            &["Ligustrum lucidum"],
            &["女贞", "大叶女贞"],
        ),
        species(
            "Buddleja davidii",
            Medium,
            "Butterfly bush is a fast-growing shrub that can be invasive in disturbed areas.",
            &["Buddleja davidii"],
            &["大叶醉鱼草", "醉鱼草"],
        ),
        species(
            "Hedychium gardnerianum",
            High,
            "Kahili ginger is a fast-growing perennial that forms dense stands and displaces native vegetation.",
            &["Hedychium gardnerianum"],
            &["野姜", "卡希利姜"],
        ),
        species(
            "Tradescantia fluminensis",
            High,
            "Wandering jew is a fast-growing ground cover that forms dense mats and displaces native vegetation.",
            &["Tradescantia fluminensis"],
            &["紫露草", "水竹草"],
        ),
        species(
            "Wedelia trilobata",
            High,
            "Singapore daisy is a fast-growing ground cover that forms dense mats and displaces native vegetation.",
            &["Wedelia trilobata", "Sphagneticola trilobata"],
            &["三裂叶蟛蜞菊", "南美蟛蜞菊"],
        ),
        species(
            "Sphagneticola calendulacea",
            Medium,
            "Creeping daisy is a fast-growing ground cover that can be invasive in tropical regions.",
            &["Sphagneticola calendulacea", "Wedelia chinensis"],
            &["蟛蜞菊", "地锦花"],
        ),
    ]
}
