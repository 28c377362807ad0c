//! Synthetic seed records for first runs and demos.

use chrono::{Duration, Utc};
use rand::Rng;

use crate::record::model::{CATEGORIES, Priority, Record, Region, Status};

/// Number of records generated for a first-run seed.
pub const SEED_COUNT: usize = 25;

const SEED_RECIPIENT: &str = "voce@empresa.com";

const SEED_SENDERS: [&str; 5] = [
    "joao@empresa.com",
    "maria@cliente.com",
    "suporte@servico.com",
    "pedro@parceiro.com",
    "ana@fornecedor.com",
];

const SEED_TAGS: [&str; 2] = ["importante", "revisar"];

/// The five largest municipalities of a region, used by the seed generator.
#[must_use]
pub const fn cities_for(region: Region) -> [&'static str; 5] {
    match region {
        Region::Acre => [
            "Rio Branco",
            "Cruzeiro do Sul",
            "Sena Madureira",
            "Tarauacá",
            "Feijó",
        ],
        Region::Alagoas => [
            "Maceió",
            "Arapiraca",
            "Palmeira dos Índios",
            "Rio Largo",
            "Penedo",
        ],
        Region::Amapa => [
            "Macapá",
            "Santana",
            "Laranjal do Jari",
            "Oiapoque",
            "Porto Grande",
        ],
        Region::Amazonas => [
            "Manaus",
            "Parintins",
            "Itacoatiara",
            "Manacapuru",
            "Coari",
        ],
        Region::Bahia => [
            "Salvador",
            "Feira de Santana",
            "Vitória da Conquista",
            "Camaçari",
            "Juazeiro",
        ],
        Region::Ceara => [
            "Fortaleza",
            "Caucaia",
            "Juazeiro do Norte",
            "Maracanaú",
            "Sobral",
        ],
        Region::DistritoFederal => [
            "Brasília",
            "Ceilândia",
            "Taguatinga",
            "Samambaia",
            "Planaltina",
        ],
        Region::EspiritoSanto => [
            "Vitória",
            "Vila Velha",
            "Serra",
            "Cariacica",
            "Linhares",
        ],
        Region::Goias => [
            "Goiânia",
            "Aparecida de Goiânia",
            "Anápolis",
            "Rio Verde",
            "Luziânia",
        ],
        Region::Maranhao => ["São Luís", "Imperatriz", "Timon", "Caxias", "Codó"],
        Region::MatoGrosso => [
            "Cuiabá",
            "Várzea Grande",
            "Rondonópolis",
            "Sinop",
            "Tangará da Serra",
        ],
        Region::MatoGrossoDoSul => [
            "Campo Grande",
            "Dourados",
            "Três Lagoas",
            "Corumbá",
            "Ponta Porã",
        ],
        Region::MinasGerais => [
            "Belo Horizonte",
            "Uberlândia",
            "Contagem",
            "Juiz de Fora",
            "Betim",
        ],
        Region::Para => [
            "Belém",
            "Ananindeua",
            "Santarém",
            "Marabá",
            "Castanhal",
        ],
        Region::Paraiba => [
            "João Pessoa",
            "Campina Grande",
            "Santa Rita",
            "Patos",
            "Bayeux",
        ],
        Region::Parana => [
            "Curitiba",
            "Londrina",
            "Maringá",
            "Ponta Grossa",
            "Cascavel",
        ],
        Region::Pernambuco => [
            "Recife",
            "Jaboatão dos Guararapes",
            "Olinda",
            "Caruaru",
            "Petrolina",
        ],
        Region::Piaui => ["Teresina", "Parnaíba", "Picos", "Piripiri", "Floriano"],
        Region::RioDeJaneiro => [
            "Rio de Janeiro",
            "São Gonçalo",
            "Duque de Caxias",
            "Nova Iguaçu",
            "Niterói",
        ],
        Region::RioGrandeDoNorte => [
            "Natal",
            "Mossoró",
            "Parnamirim",
            "São Gonçalo do Amarante",
            "Macaíba",
        ],
        Region::RioGrandeDoSul => [
            "Porto Alegre",
            "Caxias do Sul",
            "Pelotas",
            "Canoas",
            "Santa Maria",
        ],
        Region::Rondonia => [
            "Porto Velho",
            "Ji-Paraná",
            "Ariquemes",
            "Vilhena",
            "Cacoal",
        ],
        Region::Roraima => [
            "Boa Vista",
            "Rorainópolis",
            "Caracaraí",
            "Alto Alegre",
            "Mucajaí",
        ],
        Region::SantaCatarina => [
            "Florianópolis",
            "Joinville",
            "Blumenau",
            "São José",
            "Criciúma",
        ],
        Region::SaoPaulo => [
            "São Paulo",
            "Guarulhos",
            "Campinas",
            "São Bernardo do Campo",
            "Santo André",
        ],
        Region::Sergipe => [
            "Aracaju",
            "Nossa Senhora do Socorro",
            "Lagarto",
            "Itabaiana",
            "Estância",
        ],
        Region::Tocantins => [
            "Palmas",
            "Araguaína",
            "Gurupi",
            "Porto Nacional",
            "Paraíso do Tocantins",
        ],
    }
}

/// Generate `count` synthetic records with randomized fields.
///
/// Ids run `email-1` through `email-{count}`; regions, cities, statuses and
/// priorities are drawn uniformly, dates fall within the last 30 days.
#[must_use]
pub fn synthetic_records(count: usize) -> Vec<Record> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    (0..count)
        .map(|i| {
            let region = Region::ALL[rng.gen_range(0..Region::ALL.len())];
            let cities = cities_for(region);
            let city = cities[rng.gen_range(0..cities.len())];
            let number = i + 1;

            Record {
                id: format!("email-{number}"),
                subject: format!("Assunto do E-mail {number}"),
                sender: SEED_SENDERS[rng.gen_range(0..SEED_SENDERS.len())].to_string(),
                recipient: SEED_RECIPIENT.to_string(),
                content: format!(
                    "Este é o conteúdo do e-mail {number}. Contém informações importantes \
                     sobre a cidade de {city}, {region}.",
                    region = region.display_name(),
                ),
                status: Status::ALL[rng.gen_range(0..Status::ALL.len())],
                priority: Priority::ALL[rng.gen_range(0..Priority::ALL.len())],
                category: rng
                    .gen_bool(0.7)
                    .then(|| CATEGORIES[rng.gen_range(0..CATEGORIES.len())].to_string()),
                region: Some(region),
                city: Some(city.to_string()),
                date: now - Duration::seconds(rng.gen_range(0..30 * 24 * 60 * 60)),
                tags: if rng.gen_bool(0.5) {
                    SEED_TAGS.iter().map(ToString::to_string).collect()
                } else {
                    Vec::new()
                },
            }
        })
        .collect()
}
